// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::OsString;

use exitcode::ExitCode;
use structopt::{
    clap::{crate_version, ErrorKind},
    StructOpt,
};

use crate::log;

/// Parse `args` into the configuration `T`. Help and version requests come back as
/// [exitcode::USAGE] with the text to print, anything else is logged and mapped to
/// [exitcode::CONFIG].
pub fn config<T>(args: Vec<OsString>, bin: &'static str) -> Result<T, (ExitCode, String)>
where
    T: StructOpt,
{
    T::from_iter_safe(args).map_err(|err| match err.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => (exitcode::USAGE, err.message),
        _ => {
            let setup_logger = log::default(bin, crate_version!());
            crit!(setup_logger, "Failed to parse provided configuration."; "error" => err.to_string());
            (exitcode::CONFIG, String::default())
        }
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use structopt::StructOpt;

    use super::*;

    const BIN: &str = "bin";

    #[derive(Debug, StructOpt, PartialEq)]
    #[structopt(about = "Test configuration.", version = crate_version!())]
    struct TestConfig {
        #[structopt(long = "flags", short = "f")]
        flags: bool,
        #[structopt(long = "repr", short = "r", default_value = "i32")]
        repr: String,
    }

    #[rstest]
    #[case::defaults(vec!["test"], Ok(TestConfig { flags: false, repr: String::from("i32") }))]
    #[case::flags(vec!["test", "-f", "-r", "u8"], Ok(TestConfig { flags: true, repr: String::from("u8") }))]
    #[case::help(vec!["test", "-h"], Err(exitcode::USAGE))]
    #[case::version(vec!["test", "-V"], Err(exitcode::USAGE))]
    #[case::unknown(vec!["test", "--nope"], Err(exitcode::CONFIG))]
    fn test_config(#[case] args: Vec<&str>, #[case] expected: Result<TestConfig, ExitCode>) {
        let args = args.into_iter().map(OsString::from).collect();
        let result = config::<TestConfig>(args, BIN).map_err(|(code, _)| code);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_help_message() {
        let args = vec![OsString::from("test"), OsString::from("-h")];
        let (code, message) = config::<TestConfig>(args, BIN).unwrap_err();
        assert_eq!(code, exitcode::USAGE);
        assert!(message.contains("--repr"));
    }
}
