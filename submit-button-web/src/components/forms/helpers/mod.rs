mod submission_status_view;

pub use submission_status_view::SubmissionStatusView;
