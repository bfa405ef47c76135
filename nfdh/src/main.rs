use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser as ClapParser;
use log::{info, warn};
use nfdh::config::SweepConfig;
use nfdh::io::cli::{Cli, Command};
use nfdh::{aggregate, generator, io, surface, sweep};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shelf_rs::entities::SPInstance;
use shelf_rs::eval;
use shelf_rs::io::svg::{SvgDrawOptions, packing_to_svg};
use shelf_rs::io::{export, import};
use shelf_rs::nfdh::pack;

fn main() -> Result<()> {
    let cli = Cli::parse();
    io::init_logger(cli.log_level)?;

    match cli.command {
        Command::Solve {
            input_file,
            width,
            solution_folder,
        } => main_solve(&input_file, width, solution_folder),
        Command::Generate {
            output_file,
            n_rects,
            min_width,
            max_width,
            min_height,
            max_height,
            seed,
        } => main_generate(
            &output_file,
            n_rects,
            min_width,
            max_width,
            min_height,
            max_height,
            seed,
        ),
        Command::Sweep {
            config_file,
            output_folder,
        } => main_sweep(config_file, &output_folder),
        Command::Aggregate {
            input_folder,
            output_file,
        } => main_aggregate(&input_folder, &output_file),
        Command::Surface {
            input_file,
            output_file,
        } => main_surface(&input_file, &output_file),
        Command::Split {
            input_file,
            output_folder,
        } => main_split(&input_file, &output_folder),
    }
}

fn main_solve(
    input_file: &Path,
    width: Option<f32>,
    solution_folder: Option<PathBuf>,
) -> Result<()> {
    let input_stem = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let instance = match width {
        Some(strip_width) => {
            let rects = import::read_rect_list(input_file)?;
            let mut instance = SPInstance::new(rects, strip_width);
            if let Some(label) = import::parse_labelled_stem(&input_stem) {
                if label.strip_width == strip_width {
                    instance.known_opt_height = Some(label.opt_height);
                }
            }
            instance
        }
        None => import::read_labelled_instance(input_file)
            .context("no --width given and the filename carries no W<width> label")?,
    };

    let packing = pack(&instance.rects, instance.strip_width)?;

    let lower_bound = eval::area_lower_bound(&instance);
    let ratio = eval::approx_ratio(packing.height, lower_bound);
    info!(
        "[SOLVE] packed {} rectangles: H={}, OPT_H>={}, H/OPT_H={ratio:.4}",
        instance.n_rects(),
        packing.height,
        lower_bound,
    );
    if let Some(opt_height) = instance.known_opt_height {
        info!(
            "[SOLVE] known optimal height {opt_height}: H/OPT(I)={:.4}",
            packing.height / opt_height
        );
    }

    if let Some(folder) = solution_folder {
        fs::create_dir_all(&folder)
            .with_context(|| format!("could not create solution folder: {}", folder.display()))?;

        let ext_packing = export::export_packing(&instance, &packing);
        io::write_json(&ext_packing, &folder.join(format!("sol_{input_stem}.json")))?;

        let document = packing_to_svg(&packing, &instance, &SvgDrawOptions::default(), &input_stem);
        io::write_svg(&document, &folder.join(format!("sol_{input_stem}.svg")))?;
    }

    Ok(())
}

fn main_generate(
    output_file: &Path,
    n_rects: usize,
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!("[GEN] seed: {seed}");

    let mut rng = SmallRng::seed_from_u64(seed);
    let rects =
        generator::uniform_rects(n_rects, min_width, max_width, min_height, max_height, &mut rng)?;
    export::write_rect_list(&rects, output_file)
}

fn main_sweep(config_file: Option<PathBuf>, output_folder: &Path) -> Result<()> {
    let config: SweepConfig = match config_file {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            SweepConfig::default()
        }
        Some(path) => io::read_json(&path).context("incorrect config file format")?,
    };
    info!("[MAIN] successfully parsed SweepConfig: {config:?}");

    sweep::run_sweep(&config, output_folder)?;
    Ok(())
}

fn main_aggregate(input_folder: &Path, output_file: &Path) -> Result<()> {
    let rows = aggregate::aggregate_folder(input_folder)?;
    aggregate::write_summary(&rows, output_file)
}

fn main_surface(input_file: &Path, output_file: &Path) -> Result<()> {
    let rows = surface::read_summary(input_file)?;
    ensure!(
        !rows.is_empty(),
        "summary holds no rows: {}",
        input_file.display()
    );
    io::write_svg(&surface::surface_to_svg(&rows), output_file)
}

fn main_split(input_file: &Path, output_folder: &Path) -> Result<()> {
    let content = fs::read_to_string(input_file)
        .with_context(|| format!("could not open file: {}", input_file.display()))?;
    let problems = import::parse_orlib(&content)?;

    fs::create_dir_all(output_folder)
        .with_context(|| format!("could not create folder: {}", output_folder.display()))?;

    for (i, problem) in problems.iter().enumerate() {
        let name = format!(
            "{}_W{}_OPTH{}.txt",
            i + 1,
            problem.strip_width,
            problem.opt_height
        );
        export::write_rect_list(&problem.rects, &output_folder.join(name))?;
    }
    info!(
        "[SPLIT] {} problems written to {}",
        problems.len(),
        output_folder.display()
    );
    Ok(())
}
