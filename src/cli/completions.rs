use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

const APP_NAME: &str = "coursecity-cert";

pub fn write_completion<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, APP_NAME, out);
}
