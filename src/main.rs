mod app;
mod board;
mod command;
mod config;
mod consts;
mod game;
mod options;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::options::Options;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use log::{debug, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake by typing commands: \"move [N]\", \"up\", \"down\", \"left\",
\"right\", or \"exit\".

Options:
  -c, --config <FILE>      Read configuration from <FILE>
      --settings <FILE>    Read the grid dimension & apple count from <FILE>
  -d, --dimension <N>      Play on an N×N grid
  -a, --apples <N>         Keep N apples on the grid
      --log-file <FILE>    Write log messages to <FILE>
  -v, --verbose            Log debugging messages
  -h, --help               Show this help and exit
  -V, --version            Show the program version and exit
";

fn main() -> ExitCode {
    let r = match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => run(args),
        Ok(Mode::Help) => {
            print!("{USAGE}");
            Ok(())
        }
        Ok(Mode::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Err(e) => Err(e.into()),
    };
    exit_code(r)
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            Err(_) => Config::default(),
        },
    };
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::from(config.logging.level)
    };
    if let Some(path) = args.log_file.as_deref().or(config.logging.file.as_deref()) {
        init_logging(path, level)?;
    }
    let options = args.options(config.game)?;
    debug!("Using {options:?}");
    let game = Game::new(options).context("failed to start game")?;
    App::new(game).run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn init_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = fs_err::File::create(path)?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("settings") => args.settings = Some(PathBuf::from(parser.value()?)),
                Arg::Short('d') | Arg::Long("dimension") => {
                    args.dimension = Some(parser.value()?.parse()?);
                }
                Arg::Short('a') | Arg::Long("apples") => {
                    args.apples = Some(parser.value()?.parse()?);
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('v') | Arg::Long("verbose") => args.verbose = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

/// Command-line arguments for playing a game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    settings: Option<PathBuf>,
    dimension: Option<u16>,
    apples: Option<usize>,
    log_file: Option<PathBuf>,
    verbose: bool,
}

impl Arguments {
    /// Combine the game options from the configuration file with those given
    /// via a settings file or on the command line
    fn options(&self, mut options: Options) -> anyhow::Result<Options> {
        if let Some(ref path) = self.settings {
            options = Options::load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?;
        }
        if let Some(dimension) = self.dimension {
            options.dimension = dimension;
        }
        if let Some(apples) = self.apples {
            options.apples = apples;
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn parse(args: &[&str]) -> Result<Mode, lexopt::Error> {
        Mode::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Mode::Run(Arguments::default()));
    }

    #[test]
    fn all_arguments() {
        let mode = parse(&[
            "-c",
            "snake.toml",
            "--settings",
            "settings.txt",
            "--dimension=12",
            "-a",
            "4",
            "--log-file",
            "snake.log",
            "-v",
        ])
        .unwrap();
        assert_eq!(
            mode,
            Mode::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                settings: Some(PathBuf::from("settings.txt")),
                dimension: Some(12),
                apples: Some(4),
                log_file: Some(PathBuf::from("snake.log")),
                verbose: true,
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Mode::Help)]
    #[case(&["--help"], Mode::Help)]
    #[case(&["-d", "7", "--version"], Mode::Version)]
    fn info_modes(#[case] args: &[&str], #[case] mode: Mode) {
        assert_eq!(parse(args).unwrap(), mode);
    }

    #[rstest]
    #[case(&["--dimension", "big"])]
    #[case(&["--apples", "-1"])]
    #[case(&["--apples"])]
    #[case(&["--frobnicate"])]
    #[case(&["extra"])]
    fn bad_arguments(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn flags_override_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "8 2").unwrap();
        let args = Arguments {
            settings: Some(file.path().to_path_buf()),
            apples: Some(6),
            ..Arguments::default()
        };
        assert_eq!(
            args.options(Options::default()).unwrap(),
            Options {
                dimension: 8,
                apples: 6
            }
        );
    }

    #[test]
    fn config_options_used_by_default() {
        let opts = Options {
            dimension: 15,
            apples: 9,
        };
        assert_eq!(Arguments::default().options(opts).unwrap(), opts);
    }
}
