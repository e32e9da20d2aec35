use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use sfconv::conv::{self, act2hz, hz2ct, tc2sec, tc2sec_attack, tc2sec_delay, tc2sec_release};
use sfconv::{render_tone, to_wav_bytes, ConversionConfig, PanTableMode, ToneParams};

fn parse_duration(s: &str) -> Result<Duration, std::num::ParseIntError> {
    let ms: u64 = s.parse()?;
    Ok(Duration::from_millis(ms))
}

/// Convert SoundFont parameter units and render test tones
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// How the pan table is built
    #[arg(long, value_enum, global = true)]
    pan_table: Option<PanTableMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert one value
    Convert {
        /// Unit of the input value
        #[arg(value_enum)]
        unit: Unit,

        /// Input value
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
    /// Print every entry of a lookup table
    Dump {
        /// Table to print
        #[arg(value_enum)]
        table: Table,
    },
    /// Render a stereo sine tone to a WAV file
    Render {
        /// Output WAV path
        output: PathBuf,

        /// Pitch in absolute cents
        #[arg(long, default_value_t = 6900.0, allow_negative_numbers = true)]
        pitch: f32,

        /// Initial attenuation in centibels
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        attenuation: f32,

        /// MIDI velocity
        #[arg(long, default_value_t = 127)]
        velocity: u8,

        /// Pan position (-500 to 500)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pan: f32,

        /// Balance in centibels (-960 to 960)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        balance: f32,

        /// Envelope delay in timecents
        #[arg(long, default_value_t = -32768.0, allow_negative_numbers = true)]
        delay: f32,

        /// Envelope attack in timecents
        #[arg(long, default_value_t = -32768.0, allow_negative_numbers = true)]
        attack: f32,

        /// Envelope release in timecents
        #[arg(long, default_value_t = -6000.0, allow_negative_numbers = true)]
        release: f32,

        /// Key on duration in milliseconds
        #[arg(long, default_value = "1000", value_parser = parse_duration)]
        key_on_duration: Duration,

        /// Output sample rate
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Unit {
    /// Absolute cents, table lookup and closed form
    Cents,
    /// Hertz to absolute cents
    Hz,
    /// Attenuation in centibels
    Cb,
    /// Balance in centibels
    Balance,
    /// Pan position
    Pan,
    /// Envelope time in timecents
    Timecents,
    /// Modulator curve step (0-127)
    Curve,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Table {
    /// Fractional octave multipliers
    Ct2hz,
    /// Centibel to gain
    Cb2amp,
    /// Concave modulator curve
    Concave,
    /// Convex modulator curve
    Convex,
    /// Quarter sine pan law
    Pan,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = args
        .pan_table
        .map(ConversionConfig::with_pan_table)
        .unwrap_or_default();
    conv::init_with_config(&config);
    let tables = conv::tables();

    match args.command {
        Commands::Convert { unit, value } => match unit {
            Unit::Cents => {
                println!("ct2hz_real({value}) = {} Hz", tables.ct2hz_real(value));
                println!("ct2hz({value}) = {} Hz", tables.ct2hz(value));
                println!("act2hz({value}) = {} Hz", act2hz(value));
            }
            Unit::Hz => println!("hz2ct({value}) = {} cents", hz2ct(value)),
            Unit::Cb => println!("cb2amp({value}) = {}", tables.cb2amp(value)),
            Unit::Balance => {
                println!("left = {}", tables.balance(value, true));
                println!("right = {}", tables.balance(value, false));
            }
            Unit::Pan => {
                println!("left = {}", tables.pan(value, true));
                println!("right = {}", tables.pan(value, false));
            }
            Unit::Timecents => {
                println!("tc2sec = {} s", tc2sec(value));
                println!("tc2sec_delay = {} s", tc2sec_delay(value));
                println!("tc2sec_attack = {} s", tc2sec_attack(value));
                println!("tc2sec_release = {} s", tc2sec_release(value));
            }
            Unit::Curve => {
                println!("concave = {}", tables.concave(value));
                println!("convex = {}", tables.convex(value));
            }
        },
        Commands::Dump { table } => {
            let entries: &[f32] = match table {
                Table::Ct2hz => tables.ct2hz_table().as_slice(),
                Table::Cb2amp => tables.cb2amp_table().as_slice(),
                Table::Concave => tables.concave_table().as_slice(),
                Table::Convex => tables.convex_table().as_slice(),
                Table::Pan => tables.pan_table().as_slice(),
            };
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for (i, entry) in entries.iter().enumerate() {
                writeln!(out, "{i}\t{entry}")?;
            }
        }
        Commands::Render {
            output,
            pitch,
            attenuation,
            velocity,
            pan,
            balance,
            delay,
            attack,
            release,
            key_on_duration,
            sample_rate,
        } => {
            let params = ToneParams {
                pitch,
                attenuation,
                velocity,
                pan,
                balance,
                delay,
                attack,
                release,
                key_on: key_on_duration,
                sample_rate,
            };

            let frames = render_tone(tables, &params)?;
            let wav_data = to_wav_bytes(&frames, sample_rate)?;

            let mut wav_file = std::fs::File::create(&output)
                .with_context(|| format!("unable to create '{}'", output.display()))?;
            wav_file.write_all(&wav_data)?;
            wav_file.sync_all()?;

            info!("Wrote {} frames to {}", frames.len(), output.display());
        }
    }

    Ok(())
}
