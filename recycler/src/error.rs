/// Wiring errors: a protocol method was called while a required collaborator is missing.
///
/// These indicate a bug in the host application. The plain engine methods panic with this
/// error; the `try_*` variants return it instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no item adaptor is attached")]
    NoAdaptor,
    #[error("no layout manager is attached")]
    NoLayoutManager,
}

#[cold]
#[track_caller]
pub(crate) fn fatal(err: EngineError) -> ! {
    rwarn!(error = %err, "precondition violated");
    panic!("recycler: {err}")
}
