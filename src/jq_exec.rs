//! jq pre-processing for input documents, used to dig a fuzzy number out of
//! a larger payload (e.g. `.measurements[0].membership`).
use std::path::Path;

use jaq_core::{load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

use crate::error::{Error, Result};

/// Run `filter_src` against the document loaded from `path`, returning every
/// output as JSON. Parse, compile and runtime failures all become
/// [`Error::Jq`] for that file.
pub fn run_jaq(filter_src: &str, input: &Value, path: &Path) -> Result<Vec<Value>> {
    let jq_error = |message: String| Error::Jq { path: path.to_path_buf(), message };

    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader.load(&arena, program).map_err(|errs| {
        jq_error(
            errs.iter()
                .map(|(_, err)| format!("cannot parse `{filter_src}`: {err:?}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    })?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(|errs| {
            jq_error(
                errs.iter()
                    .flat_map(|(_, undefined)| undefined.iter())
                    .map(|(name, kind)| format!("undefined `{name}` ({kind:?}) in `{filter_src}`"))
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

    let inputs = RcIter::new(core::iter::empty());
    let outputs = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    for item in outputs {
        let val = item.map_err(|e| jq_error(format!("{e:?}")))?;
        // Val renders as JSON text; go back through serde_json for a Value.
        let value = serde_json::from_str(&val.to_string())
            .map_err(|e| jq_error(format!("output is not JSON: {e}")))?;
        out.push(value);
    }
    Ok(out)
}
