// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;
use tracing::Level;

use tunesmith::{EngineConfig, Genre, MusicalEvent, PresetLibrary, Quantization, SuggestionEngine, TheoryDatabase};

fn print_usage() {
    println!("Tunesmith - Musical Suggestion Engine");
    println!();
    println!("Usage: tunesmith [OPTIONS] [EVENTS...]");
    println!();
    println!("Events are pitches (C4, F#3, Bb2), chords (C4+E4+G4) or REST.");
    println!();
    println!("Options:");
    println!("  --genre <NAME>          Pop, Jazz, Classical, Rock, Electronic or Blues (default Pop)");
    println!("  --octave <N>            Base octave for new notes and chords (default 4)");
    println!("  --bpm <N>               Session tempo (default 120, or the preset's)");
    println!("  --quantization <Q>      1/16, 1/8, 1/4 or 1/1 (default 1/4)");
    println!("  --seed <N>              Seed the random generator for repeatable output");
    println!("  --config <FILE>         Load engine settings from a YAML or TOML file");
    println!("  --preset <NAME>         Start from a built-in melody preset");
    println!("  --count <N>             Accept N suggestions in a row (default 1)");
    println!("  --list-presets          List built-in melody presets");
    println!("  --list-genres           List genres and their theory tables");
    println!("  --verbose               Log strategy decisions");
    println!("  --help                  Show this help message");
}

#[derive(Debug)]
struct Options {
    genre: Option<Genre>,
    octave: i32,
    bpm: Option<u32>,
    quantization: Quantization,
    seed: Option<u64>,
    config: Option<PathBuf>,
    preset: Option<String>,
    count: usize,
    list_presets: bool,
    list_genres: bool,
    verbose: bool,
    help: bool,
    events: Vec<MusicalEvent>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            genre: None,
            octave: 4,
            bpm: None,
            quantization: Quantization::Quarter,
            seed: None,
            config: None,
            preset: None,
            count: 1,
            list_presets: false,
            list_genres: false,
            verbose: false,
            help: false,
            events: Vec::new(),
        }
    }
}

fn option_value<'a>(args: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a String> {
    args.next()
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--genre" => {
                let value = option_value(&mut iter, arg)?;
                options.genre = Some(value.parse().context("Invalid --genre")?);
            }
            "--octave" => {
                let value = option_value(&mut iter, arg)?;
                options.octave = value
                    .parse()
                    .map_err(|_| anyhow!("Invalid octave: {}", value))?;
            }
            "--bpm" => {
                let value = option_value(&mut iter, arg)?;
                options.bpm = Some(value.parse().map_err(|_| anyhow!("Invalid BPM: {}", value))?);
            }
            "--quantization" => {
                let value = option_value(&mut iter, arg)?;
                options.quantization = value.parse().context("Invalid --quantization")?;
            }
            "--seed" => {
                let value = option_value(&mut iter, arg)?;
                options.seed = Some(value.parse().map_err(|_| anyhow!("Invalid seed: {}", value))?);
            }
            "--config" => {
                options.config = Some(PathBuf::from(option_value(&mut iter, arg)?));
            }
            "--preset" => {
                options.preset = Some(option_value(&mut iter, arg)?.clone());
            }
            "--count" => {
                let value = option_value(&mut iter, arg)?;
                options.count = value
                    .parse()
                    .map_err(|_| anyhow!("Invalid count: {}", value))?;
            }
            "--list-presets" => options.list_presets = true,
            "--list-genres" => options.list_genres = true,
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            token => {
                let event: MusicalEvent = token
                    .parse()
                    .with_context(|| format!("Invalid event: {}", token))?;
                options.events.push(event);
            }
        }
    }

    Ok(options)
}

fn list_genres() {
    let database = TheoryDatabase::global();
    for genre in Genre::ALL {
        let theory = database.genre(genre);
        let quantizations: Vec<&str> = theory.quantizations.iter().map(|q| q.label()).collect();
        println!(
            "{:<12} {:>3}-{:<3} BPM  primary scale: {:<16} grid: {}",
            genre.name(),
            theory.tempo_range.start(),
            theory.tempo_range.end(),
            theory.primary_scale().name(),
            quantizations.join(", ")
        );
    }
}

fn list_presets(library: &PresetLibrary) {
    for preset in library.all() {
        let genre = preset.genre.map(|g| g.name()).unwrap_or("-");
        println!(
            "{:<32} {:<11} {:>3} BPM  {} events",
            preset.name,
            genre,
            preset.bpm,
            preset.sequence.len()
        );
    }
}

fn run(options: Options) -> Result<()> {
    let library = PresetLibrary::builtin()?;

    if options.list_genres {
        list_genres();
        return Ok(());
    }
    if options.list_presets {
        list_presets(&library);
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let engine = SuggestionEngine::new(config);

    let mut history = Vec::new();
    let mut genre = options.genre;
    let mut bpm = options.bpm;
    if let Some(name) = &options.preset {
        let preset = library
            .find(name)
            .ok_or_else(|| anyhow!("Unknown preset: {} (see --list-presets)", name))?;
        tracing::info!(preset = %preset.name, events = preset.sequence.len(), "loaded preset");
        history.extend(preset.sequence.iter().cloned());
        genre = genre.or(preset.genre);
        bpm = bpm.or(Some(preset.bpm));
    }
    history.extend(options.events);

    let genre = genre.unwrap_or(Genre::Pop);
    let bpm = bpm.unwrap_or(120);

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for step in 1..=options.count {
        let Some(suggestion) =
            engine.suggest(&history, genre, bpm, options.quantization, options.octave, &mut rng)
        else {
            println!("No suggestion: play something first");
            return Ok(());
        };

        if options.count > 1 {
            println!("{:>3}: {}", step, suggestion);
        } else {
            println!("{}", suggestion);
        }
        history.push(suggestion.into_event());
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }

    let level = if options.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();

    run(options)
}
