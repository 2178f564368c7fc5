pub mod demo;
mod width_util;
