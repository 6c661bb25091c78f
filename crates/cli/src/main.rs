// Copyright (C) 2022-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bgp_shutcomm_pkt::{
    api::{
        create_notification_with_data, decode_shutdown_message, decode_universal_notification,
        encode_shutdown_message, get_subcodes, is_hex, EncodeRequest,
    },
    codec::decode_universal,
    transcoder::decode_hex,
    CodecError,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, Level};

/// Sub-code used by `auto` when the input is a message to encode
const DEFAULT_SUB_CODE: u8 = 2;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Max logging level written to stderr
    #[clap(long, global = true, default_value = "warn")]
    log_level: Level,

    /// Print JSON on a single line
    #[clap(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode a Shutdown Communication into a Cease NOTIFICATION
    Encode {
        message: String,

        /// Administrative Shutdown (2) or Administrative Reset (4)
        #[clap(short, long, default_value_t = DEFAULT_SUB_CODE)]
        subcode: u8,
    },

    /// Decode a Cease NOTIFICATION carrying a Shutdown Communication
    Decode { hex: String },

    /// Build a NOTIFICATION for any error code and sub-code
    Notify {
        #[clap(short, long)]
        error_code: u8,

        #[clap(short, long)]
        subcode: u8,

        /// Label of the data carried by the pair, e.g. `length` or `message`
        #[clap(short, long, default_value = "")]
        data_type: String,

        #[clap(short, long, default_value = "")]
        value: String,
    },

    /// Decode a NOTIFICATION with any error code and sub-code
    Inspect { hex: String },

    /// List the sub-codes that can carry a Shutdown Communication
    Subcodes,

    /// Decode the input when it looks like hex, otherwise encode it as an
    /// Administrative Shutdown communication
    Auto { input: String },
}

fn init_tracing(level: Level) {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {err}");
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), serde_json::Error> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

/// Hex input is decoded as a generic NOTIFICATION unless its data is an
/// RFC9003 Shutdown Communication. Input the generic decoder rejects falls
/// back to the Shutdown decoder.
fn auto(input: &str, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !is_hex(input) {
        debug!("input is not hex, encoding it");
        let request = EncodeRequest {
            message: input.to_string(),
            subcode: DEFAULT_SUB_CODE,
        };
        print_json(&encode_shutdown_message(&request)?, compact)?;
        return Ok(());
    }
    let raw = decode_hex(input).map_err(CodecError::from)?;
    match decode_universal(&raw) {
        Ok(notification) if !notification.has_shutdown_communication() => {
            print_json(&decode_universal_notification(input)?, compact)?
        }
        Ok(_) => {
            debug!("notification carries a shutdown communication");
            print_json(&decode_shutdown_message(input)?, compact)?;
        }
        Err(err) => {
            debug!(error = %err, "not a well formed notification, trying shutdown decoder");
            print_json(&decode_shutdown_message(input)?, compact)?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let compact = cli.compact;
    match cli.command {
        Command::Encode { message, subcode } => {
            let request = EncodeRequest { message, subcode };
            print_json(&encode_shutdown_message(&request)?, compact)?;
        }
        Command::Decode { hex } => print_json(&decode_shutdown_message(&hex)?, compact)?,
        Command::Notify {
            error_code,
            subcode,
            data_type,
            value,
        } => print_json(
            &create_notification_with_data(error_code, subcode, &data_type, &value)?,
            compact,
        )?,
        Command::Inspect { hex } => print_json(&decode_universal_notification(&hex)?, compact)?,
        Command::Subcodes => print_json(&get_subcodes(), compact)?,
        Command::Auto { input } => auto(&input, compact)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
