pub mod argparse;
pub mod commands;
pub mod logger;
mod source;
