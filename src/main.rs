use {
    anyhow::{bail, Context},
    clap::{ArgAction, Parser},
    font_bake::{
        bake::{FontConverter, FontTable, Project},
        header::{self, DEFAULT_LICENSE},
    },
    log::{debug, error},
    pretty_env_logger::init,
    std::{
        fs::read_to_string,
        path::{Path, PathBuf},
    },
};

/// Generate bitmap font lookup tables for embedded graphics.
#[derive(Debug, Parser)]
#[command(version, about, disable_version_flag = true)]
struct Args {
    /// Path or name of the font file
    #[arg(short, long, required_unless_present = "project")]
    font: Option<String>,

    /// Size(s) of the font in pixels; each must be a multiple of 8
    #[arg(short, long, num_args = 1.., required_unless_present = "project")]
    size: Vec<u32>,

    /// Path to the output header file
    #[arg(short, long, required_unless_present = "project")]
    output: Option<PathBuf>,

    /// Bake every font listed in a `.toml` project file instead
    #[arg(short, long, conflicts_with_all = ["font", "size", "output"])]
    project: Option<PathBuf>,

    /// File holding the comment block written at the top of each header
    #[arg(short, long)]
    license: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

/// One output header and the tables baked into it.
struct Job {
    collection_index: u32,
    font: String,
    output: PathBuf,
    sizes: Vec<u32>,
}

impl Job {
    /// Bakes every size, skipping (and reporting) the ones which fail.
    fn bake(&self) -> Vec<FontTable> {
        let mut res = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            match FontConverter::open_collection(&self.font, size, self.collection_index)
                .and_then(|converter| FontTable::from_converter(&converter))
            {
                Ok(table) => res.push(table),
                Err(err) => {
                    error!("Unable to bake {} at {} px: {}", self.font, size, err);
                    eprintln!("Skipping {} px: {}", size, err);
                }
            }
        }

        res
    }
}

fn read_license(path: Option<&Path>) -> anyhow::Result<String> {
    Ok(match path {
        Some(path) => read_to_string(path)
            .with_context(|| format!("Unable to read license {}", path.display()))?,
        None => DEFAULT_LICENSE.to_owned(),
    })
}

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG=debug in your environment variables to see log output
    init();

    let args = Args::parse();

    let (jobs, license) = if let Some(project_path) = &args.project {
        debug!("Baking project `{}`", project_path.display());

        let project = Project::read(project_path)?;
        let jobs = project
            .fonts()
            .iter()
            .map(|font| Job {
                collection_index: font.collection_index(),
                font: font.src().to_owned(),
                output: font.output().to_path_buf(),
                sizes: font.sizes().to_vec(),
            })
            .collect::<Vec<_>>();
        let license = read_license(args.license.as_deref().or_else(|| project.license()))?;

        (jobs, license)
    } else {
        let (Some(font), Some(output)) = (args.font, args.output) else {
            bail!("--font, --size and --output are required");
        };
        let job = Job {
            collection_index: 0,
            font,
            output,
            sizes: args.size,
        };

        (vec![job], read_license(args.license.as_deref())?)
    };

    let mut failed = vec![];
    for job in &jobs {
        println!(
            "Generating font file for {} with {:?} px.",
            job.font, job.sizes
        );
        println!("Output file: {}", job.output.display());

        println!("Converting the font...");
        let tables = job.bake();

        let Some(text) = header::render(&license, &tables) else {
            eprintln!("No font tables could be generated for {}. :|", job.font);
            failed.push(job.font.as_str());
            continue;
        };

        println!("Exporting the font...");
        header::write(&job.output, &text)
            .with_context(|| format!("Unable to write {}", job.output.display()))?;

        if tables.len() < job.sizes.len() {
            failed.push(job.font.as_str());
        }
    }

    if !failed.is_empty() {
        bail!("Some font tables could not be generated: {}", failed.join(", "));
    }

    println!("Done. :D");

    Ok(())
}
