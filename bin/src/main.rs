//! Demo tables for the bit-prefix encoders and an exhaustive 32-bit check.

use std::{io, process::exit};

use clap::{Parser, Subcommand, ValueEnum};
use shardkey::{Key32Encoder, Key64Encoder, KeyError, UuidEncoder};
use thiserror::Error;

mod table;
mod verify;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("IO Error: {0}")]
    IOError(#[from] io::Error),
}

pub type DemoResult<T> = std::result::Result<T, DemoError>;

/// Bit-prefix shard key encoder demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct LayoutArgs {
    /// number of low bits left untouched
    #[arg(short, long, default_value_t = 11)]
    offset: u32,

    /// width of the shard field
    #[arg(short, long, default_value_t = 13)]
    size: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Preset {
    /// 48-bit window, 4-bit shard at offset 11
    UuidV7,
    /// 48-bit window, 16-bit shard at offset 16
    Ulid,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// encode 32-bit keys, one row per key
    Table32 {
        #[command(flatten)]
        layout: LayoutArgs,

        /// keys in decimal or 0x-prefixed hex; defaults to a built-in sample
        values: Vec<String>,
    },

    /// encode 64-bit keys, one block per key
    Table64 {
        #[command(flatten)]
        layout: LayoutArgs,

        /// keys in decimal or 0x-prefixed hex; defaults to a built-in sample
        values: Vec<String>,
    },

    /// encode UUID keys inside a window at the top of the UUID
    Uuid {
        /// named layout, overrides --window/--offset/--size
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,

        /// window width in bits, 0 with a zero offset and size for the identity
        #[arg(short, long, default_value_t = 48)]
        window: u32,

        #[command(flatten)]
        layout: LayoutArgs,

        /// UUIDs to encode; defaults to a built-in sample
        uuids: Vec<String>,
    },

    /// round-trip every 32-bit key
    Verify32 {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        exit(1);
    }
}

fn run(args: Args) -> DemoResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Table32 { layout, values } => {
            let enc = Key32Encoder::new(layout.offset, layout.size)?;
            let values = table::keys_or_sample(&values, layout.offset)?;
            table::print_table32(&mut out, &enc, &values)
        }
        Command::Table64 { layout, values } => {
            let enc = Key64Encoder::new(layout.offset, layout.size)?;
            let values = table::keys_or_sample(&values, layout.offset)?;
            table::print_table64(&mut out, &enc, &values)
        }
        Command::Uuid {
            preset,
            window,
            layout,
            uuids,
        } => {
            let enc = match preset {
                Some(Preset::UuidV7) => UuidEncoder::uuid_v7(),
                Some(Preset::Ulid) => UuidEncoder::ulid(),
                None => UuidEncoder::new(window, layout.offset, layout.size)?,
            };
            let uuids = table::uuids_or_sample(&uuids)?;
            table::print_uuid_table(&mut out, &enc, &uuids)
        }
        Command::Verify32 { layout } => {
            let enc = Key32Encoder::new(layout.offset, layout.size)?;
            verify::verify_all_u32(&mut out, &enc)
        }
    }
}
