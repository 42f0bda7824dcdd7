mod mock_submit;

pub use mock_submit::{sleep, submit, SubmitReceipt};
