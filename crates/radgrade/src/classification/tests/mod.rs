mod catalog;
mod common;
mod evaluation;
mod routing;
