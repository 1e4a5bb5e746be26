use self::cfg::ParamArgs;
use prb_bistable::MATERIALS;

mod cfg;
mod eval;
mod info;
mod logger;
mod sweep;

const APP_NAME: &str = env!("CARGO_BIN_NAME");

type AnyResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, author, about)]
pub(crate) struct Entry {
    /// Raise the log level (-v info, -vv debug, -vvv trace), default to
    /// `RUST_LOG` or warn
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(clap::Subcommand)]
enum Cmd {
    /// Evaluate one crank angle
    Eval(eval::Eval),
    /// Sweep the crank angle and export energy and torque curves
    Sweep(sweep::SweepCfg),
    /// Show the derived constants and the assembly range
    Info {
        #[clap(flatten)]
        params: ParamArgs,
    },
    /// List the material presets
    Materials,
}

impl Entry {
    pub(crate) fn main() {
        let entry = <Self as clap::Parser>::parse_from(wild::args());
        logger::init(entry.verbose);
        let res = match entry.cmd {
            Cmd::Eval(cfg) => eval::eval(cfg),
            Cmd::Sweep(cfg) => sweep::sweep(cfg),
            Cmd::Info { params } => info::info(params),
            Cmd::Materials => {
                MATERIALS.iter().for_each(|m| println!("{m}"));
                Ok(())
            }
        };
        if let Err(e) = res {
            eprintln!("{APP_NAME}: {e}");
            std::process::exit(1);
        }
    }
}
