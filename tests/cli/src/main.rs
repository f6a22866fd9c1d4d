use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use fontsubset::{Face, SubsetContext};

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Format {
    Truetype,
    Type1,
}

/// Subset a font the way a PDF writer would.
#[derive(Debug, Parser)]
struct Args {
    /// The font to subset.
    input: PathBuf,
    /// Where to write the subset.
    #[arg(default_value = "res.ttf")]
    output: PathBuf,
    /// The glyphs to keep, e.g. `1,3,10-20`.
    #[arg(default_value = "0-5")]
    gids: String,
    /// The index of the font in a collection.
    #[arg(long, default_value_t = 0)]
    index: u32,
    #[arg(long, value_enum, default_value_t = Format::Truetype)]
    format: Format,
    /// The object number of the font, used for the subset tag.
    #[arg(long, default_value_t = 1)]
    object_id: u32,
    /// Also write the ToUnicode CMap and the width array next to the
    /// subset.
    #[arg(long)]
    pdf: bool,
}

fn parse_gids(gids: &str) -> Result<Vec<u16>, String> {
    if gids == "*" {
        return Ok((0..u16::MAX).collect());
    }

    let mut parsed = vec![];
    for el in gids.split(',').filter(|s| !s.is_empty()) {
        let number = |s: &str| s.parse::<u16>().map_err(|err| format!("{s}: {err}"));
        match el.split_once('-') {
            Some((first, last)) => parsed.extend(number(first)?..=number(last)?),
            None => parsed.push(number(el)?),
        }
    }

    Ok(parsed)
}

// Note that this is more of an experimental CLI used for testing.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let data = std::fs::read(&args.input)?;
    let face = Face::parse(data, args.index)?;
    let count = fontsubset::FontEngine::glyph_count(&face);

    let mut ctx = SubsetContext::new(Arc::new(face), args.object_id);
    for gid in parse_gids(&args.gids)? {
        // `*` covers all possible glyph IDs.
        if gid < count {
            ctx.try_add_glyph(gid)?;
        }
    }

    let sub = match args.format {
        Format::Truetype => ctx.to_truetype()?,
        Format::Type1 => ctx.to_type1()?,
    };

    std::fs::write(&args.output, sub)?;
    log::info!("wrote {} glyphs to {}", ctx.num_glyphs(), args.output.display());

    if args.pdf {
        std::fs::write(args.output.with_extension("cmap"), ctx.create_to_unicode_map())?;
        std::fs::write(args.output.with_extension("widths"), ctx.width_array())?;
    }

    Ok(())
}
