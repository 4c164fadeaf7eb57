// Analysis API: the pipeline the presentation layer calls, plus its HTTP handlers.
// Extraction runs inside spawn_blocking; the model call is the only network I/O.

pub mod handlers;
pub mod pipeline;
