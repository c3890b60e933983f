// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::info;
use seamcarve::{calculate_energy, energy_to_image, mark_seams, Orientation, SeamCarver};
use std::path::PathBuf;

fn cli() -> Command {
    let input = || {
        Arg::new("input")
            .help("The image to read")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .index(1)
    };
    let output = || {
        Arg::new("output")
            .help("Where to write the result; the format follows the extension")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .index(2)
    };

    Command::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("carve")
                .about("Shrink an image to a target size")
                .arg(input())
                .arg(output())
                .arg(
                    Arg::new("width")
                        .long("width")
                        .short('w')
                        .help("Target width (defaults to the current width)")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .short('H')
                        .help("Target height (defaults to the current height)")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("energy")
                .about("Write the dual-gradient energy map as a grayscale image")
                .arg(input())
                .arg(output()),
        )
        .subcommand(
            Command::new("seams")
                .about("Draw the first seams the carver would remove")
                .arg(input())
                .arg(output())
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("How many seams to draw")
                        .default_value("1")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("horizontal")
                        .long("horizontal")
                        .help("Draw left-to-right seams instead of top-to-bottom ones")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn open(matches: &ArgMatches) -> Result<SeamCarver> {
    let path = matches.get_one::<PathBuf>("input").context("no input given")?;
    let image = image::open(path).with_context(|| format!("cannot read {}", path.display()))?;
    info!("read {} ({}x{})", path.display(), image.width(), image.height());
    Ok(SeamCarver::from_view(&image.to_rgb8())?)
}

fn output(matches: &ArgMatches) -> Result<&PathBuf> {
    matches.get_one::<PathBuf>("output").context("no output given")
}

fn carve(matches: &ArgMatches) -> Result<()> {
    let mut carver = open(matches)?;
    let width = matches.get_one::<u32>("width").copied().unwrap_or(carver.width());
    let height = matches.get_one::<u32>("height").copied().unwrap_or(carver.height());
    carver
        .carve(width, height)
        .with_context(|| format!("cannot carve to {}x{}", width, height))?;

    let path = output(matches)?;
    carver
        .picture()
        .save(path)
        .with_context(|| format!("cannot write {}", path.display()))?;
    info!("wrote {} ({}x{})", path.display(), width, height);
    Ok(())
}

fn energy(matches: &ArgMatches) -> Result<()> {
    let carver = open(matches)?;
    let path = output(matches)?;
    energy_to_image(&calculate_energy(carver.grid()))
        .save(path)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

fn seams(matches: &ArgMatches) -> Result<()> {
    let carver = open(matches)?;
    let count = *matches.get_one::<u32>("count").context("no seam count given")?;
    let orientation = if matches.get_flag("horizontal") {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let path = output(matches)?;
    mark_seams(carver.grid(), orientation, count)
        .with_context(|| format!("cannot draw {} {:?} seams", count, orientation))?
        .save(path)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    match cli().get_matches().subcommand() {
        Some(("carve", matches)) => carve(matches),
        Some(("energy", matches)) => energy(matches),
        Some(("seams", matches)) => seams(matches),
        _ => unreachable!("a subcommand is required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        cli().debug_assert();
    }
}
