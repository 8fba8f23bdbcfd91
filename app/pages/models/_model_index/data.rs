use super::props::props;
use crate::{common::error::Error, Context};
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};
use modelview_core::registry::parse_model_index;

/// Respond with the page's props as json, for clients that draw the summary themselves.
pub async fn data(
	context: &Context,
	_request: Request<Body>,
	model_index: &str,
) -> Result<Response<Body>> {
	let model_index = parse_model_index(model_index).ok_or(Error::BadRequest)?;
	let props = props(context, model_index);
	let body = serde_json::to_vec(&props)?;
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body))?;
	Ok(response)
}
