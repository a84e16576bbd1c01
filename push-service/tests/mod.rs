mod envelope_tests;
mod handler_tests;
mod queue_tests;
mod render_tests;
