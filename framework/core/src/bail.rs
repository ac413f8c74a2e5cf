/// Return this error from a per-graph pipeline to indicate that the graph is bailing.
///
/// This should be used when one graph's benchmark run encounters an error that is not fatal to
/// the whole sweep. For example, if a single binary invocation fails or produces no parseable
/// measurements then that graph may bail while the sweep can still cover the remaining graphs.
#[derive(derive_more::Error, derive_more::Display, Debug)]
pub struct GraphBailError {
    msg: String,
}

impl GraphBailError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl Default for GraphBailError {
    fn default() -> Self {
        Self {
            msg: "Graph run is bailing".to_string(),
        }
    }
}
