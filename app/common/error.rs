use derive_more::{Display, Error};

/// Errors a page handler returns to have the router respond with the matching status code.
#[derive(Display, Debug, Error)]
pub enum Error {
	#[display(fmt = "bad request")]
	BadRequest,
	#[display(fmt = "not found")]
	NotFound,
}
