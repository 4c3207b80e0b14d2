use crate::types::CopyResult;

/// Listener for copy outcomes.
///
/// The pipeline emits exactly one [`CopyResult`] per processed save to
/// every registered sink, whatever the outcome. Status displays and log
/// panels subscribe here.
pub trait ResultSink {
    fn on_result(&mut self, result: &CopyResult);
}

/// Adapter turning a closure into a [`ResultSink`].
pub struct FnSink<F: FnMut(&CopyResult)>(pub F);

impl<F: FnMut(&CopyResult)> ResultSink for FnSink<F> {
    fn on_result(&mut self, result: &CopyResult) {
        (self.0)(result)
    }
}
