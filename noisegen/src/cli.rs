//! Command line arguments.
//!
//! Flags override values loaded from `--config`, which override the built-in
//! defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use noisegen_core::{GeneratorConfig, GeneratorKind, PerlinSettings, RandomFieldSettings};

/// Generate noise png files.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Noise generator to use [default: random]
    #[arg(long, value_enum)]
    pub gentype: Option<GenType>,

    /// Size of output image [default: 512]
    #[arg(long)]
    pub size: Option<usize>,

    /// Name of file created
    #[arg(long, default_value = "noise.png")]
    pub filename: PathBuf,

    /// Seed to use for generation; random when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Width of kernel to average neighbouring pixels, 0 to disable [default: 0]
    #[arg(long)]
    pub cluster: Option<usize>,

    /// Number of random generated images to combine [default: 1]
    #[arg(long)]
    pub imgs: Option<u32>,

    /// Number of times to normalize image [default: 1]
    #[arg(long)]
    pub norms: Option<u32>,

    /// Number of dimensions to use with perlin [default: 2]
    #[arg(long)]
    pub dims: Option<usize>,

    /// Number of octaves to use with perlin, recommended max 4 [default: 1]
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Tile period per dimension, 1 for no tiling; the image spans one period [default: 1 each]
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    pub tile: Option<Vec<i64>>,

    /// Lattice cells per image width at the first perlin octave [default: 1]
    #[arg(long)]
    pub frequency: Option<u32>,

    /// Push perlin values away from the middle grey
    #[arg(long)]
    pub unbias: bool,

    /// Brightest output level; above 255 writes a 16-bit image [default: 255]
    #[arg(long)]
    pub target_max: Option<u32>,

    /// Fail instead of writing an all-black image when the field is uniform
    #[arg(long)]
    pub reject_degenerate: bool,

    /// JSON5 file with generator settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the resolved settings as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Log filter, e.g. `debug` or `noisegen_core=trace`; `RUST_LOG` wins when set
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Generator selected on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenType {
    /// Summed random images.
    Random,
    /// Fractal gradient noise.
    Perlin,
}

impl Cli {
    /// Applies the command line on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        match (self.gentype, &config.kind) {
            (Some(GenType::Random), GeneratorKind::Perlin(_)) => {
                config.kind = GeneratorKind::Random(RandomFieldSettings::default());
            }
            (Some(GenType::Perlin), GeneratorKind::Random(_)) => {
                config.kind = GeneratorKind::Perlin(PerlinSettings::default());
            }
            _ => {}
        }

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed as u64);
        }
        if let Some(norms) = self.norms {
            config.normalization_passes = norms;
        }
        if let Some(target_max) = self.target_max {
            config.target_max = target_max;
        }
        config.reject_degenerate |= self.reject_degenerate;

        match &mut config.kind {
            GeneratorKind::Random(settings) => {
                if let Some(images) = self.imgs {
                    settings.images = images;
                }
                if let Some(cluster) = self.cluster {
                    settings.cluster = cluster;
                }
            }
            GeneratorKind::Perlin(settings) => self.apply_perlin(settings),
        }
        config
    }

    fn apply_perlin(&self, settings: &mut PerlinSettings) {
        if let Some(dims) = self.dims {
            settings.dimensions = dims;
        }
        if let Some(octaves) = self.octaves {
            settings.octaves = octaves;
        }
        if let Some(frequency) = self.frequency {
            settings.frequency = frequency;
        }
        settings.unbias |= self.unbias;

        match &self.tile {
            Some(tile) => settings.tile.clone_from(tile),
            // An explicit dimension count without periods means no tiling on any axis.
            None if self.dims.is_some() => settings.tile.clear(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("noisegen").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn no_flags_keep_the_base_config() {
        let base = GeneratorConfig::default();
        assert_eq!(parse(&[]).apply(base.clone()), base);
    }

    #[test]
    fn perlin_flags_build_perlin_settings() {
        let cli = parse(&[
            "--gentype", "perlin", "--dims", "3", "--octaves", "4", "--tile", "2", "1", "3",
            "--size", "64", "--seed", "-5",
        ]);
        let config = cli.apply(GeneratorConfig::default());
        assert_eq!(config.size, 64);
        assert_eq!(config.seed, Some(-5i64 as u64));
        assert_eq!(
            config.kind,
            GeneratorKind::Perlin(PerlinSettings {
                dimensions: 3,
                octaves: 4,
                tile: vec![2, 1, 3],
                ..PerlinSettings::default()
            })
        );
    }

    #[test]
    fn dims_without_tile_untile_every_axis() {
        let base = GeneratorConfig {
            kind: GeneratorKind::Perlin(PerlinSettings {
                tile: vec![2, 2],
                ..PerlinSettings::default()
            }),
            ..GeneratorConfig::default()
        };
        let config = parse(&["--dims", "4"]).apply(base);
        assert_eq!(config.validate(), Ok(()));
        let GeneratorKind::Perlin(settings) = config.kind else {
            panic!("expected perlin settings");
        };
        assert!(settings.tile.is_empty());
    }

    #[test]
    fn file_dimensions_work_without_a_tile() {
        let base = GeneratorConfig {
            kind: GeneratorKind::Perlin(PerlinSettings {
                dimensions: 3,
                ..PerlinSettings::default()
            }),
            ..GeneratorConfig::default()
        };
        let config = parse(&["--gentype", "perlin", "--octaves", "2"]).apply(base);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn random_flags_override_file_values() {
        let base = GeneratorConfig {
            kind: GeneratorKind::Random(RandomFieldSettings {
                images: 3,
                cluster: 2,
            }),
            ..GeneratorConfig::default()
        };
        let config = parse(&["--imgs", "10", "--norms", "2"]).apply(base);
        assert_eq!(config.normalization_passes, 2);
        assert_eq!(
            config.kind,
            GeneratorKind::Random(RandomFieldSettings {
                images: 10,
                cluster: 2
            })
        );
    }

    #[test]
    fn negative_tile_periods_reach_validation() {
        let cli = parse(&["--gentype", "perlin", "--tile", "-1", "1"]);
        let config = cli.apply(GeneratorConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_generator_is_rejected() {
        assert!(Cli::try_parse_from(["noisegen", "--gentype", "worley"]).is_err());
    }
}
