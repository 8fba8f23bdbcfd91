//! This module contains the main entrypoint to the modelview cli.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use modelview_core::{registry::model_key, ModelRegistry};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[clap(
	about = "Browse the training and testing statistics of your fitted models.",
	setting = clap::AppSettings::DisableHelpSubcommand,
)]
enum Options {
	#[clap(name = "app")]
	App(AppOptions),
	#[clap(name = "check")]
	Check(CheckOptions),
}

#[derive(Parser, Debug)]
#[clap(about = "run the app")]
#[clap(long_about = "run the model outputs web app")]
struct AppOptions {
	#[clap(long, default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	port: u16,
	#[clap(long, env = "MODELS", help = "the path to a .json file containing the model registry")]
	models: Option<PathBuf>,
	#[clap(
		long,
		env = "MODEL_SLOTS",
		default_value = "4",
		help = "the number of empty model slots to create when no models file is given"
	)]
	slots: usize,
}

#[derive(Parser, Debug)]
#[clap(about = "check a model registry file")]
#[clap(long_about = "load a model registry file and print the model in each slot")]
struct CheckOptions {
	#[clap(help = "the path to a .json file containing the model registry")]
	models: PathBuf,
}

fn main() {
	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "modelview_app=info,modelview_util=info".into()),
		)
		.init();
	let options = Options::parse();
	let result = match options {
		Options::App(options) => cli_app(options),
		Options::Check(options) => cli_check(&options.models),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_app(options: AppOptions) -> Result<()> {
	// Load the registry from the models file if one was provided, otherwise start with empty slots.
	let registry = match options.models.as_deref() {
		Some(path) => ModelRegistry::from_path(path)?,
		None => ModelRegistry::with_slot_count(options.slots),
	};
	modelview_app::run(
		modelview_app::Options {
			host: options.host,
			port: options.port,
		},
		registry,
	)
}

fn cli_check(path: &Path) -> Result<()> {
	let registry = ModelRegistry::from_path(path)?;
	for (index, model) in registry.slots() {
		let description = match model {
			Some(model) => model.model_type().label().green(),
			None => "Not created".dimmed(),
		};
		println!("{}: {}", model_key(index), description);
	}
	eprintln!("{} contains {} model slots.", path.display(), registry.len());
	Ok(())
}
