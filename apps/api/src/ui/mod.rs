// Server-rendered form: GET / shows the idle page, POST /analyze runs one evaluation
// and re-renders the page with its outcome.

pub mod handlers;
pub mod views;
