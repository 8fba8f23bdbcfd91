use crate::Context;
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};

const STYLES: &str = include_str!("../assets/styles.css");

pub(crate) async fn get(_context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	Ok(Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/css; charset=utf-8")
		.body(Body::from(STYLES))?)
}
