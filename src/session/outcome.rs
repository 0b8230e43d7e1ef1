/// Successful result of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Read { transferred: usize, data: Vec<u8> },
    Write { transferred: usize },
    Seek { new_position: usize },
}
