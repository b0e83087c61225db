pub mod sample_dashboard;
