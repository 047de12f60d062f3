//! studentdb CLI
//!
//! One-shot command-line interface over a student data file. Every
//! invocation loads the file, runs one command and saves the file again.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use studentdb::{Config, Result, Session, SortKey, Student, StudentPatch, StudentStore};
use tracing_subscriber::{fmt, EnvFilter};

/// studentdb CLI
#[derive(Parser, Debug)]
#[command(name = "studentdb-cli")]
#[command(about = "Manage student records stored in a flat file")]
#[command(version)]
struct Args {
    /// Data file
    #[arg(short, long, default_value = studentdb::DEFAULT_DATA_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new student
    Add {
        id: i32,
        name: String,
        age: i32,
        gender: String,
        major: String,
        gpa: f64,
    },

    /// Delete a student by id
    Delete { id: i32 },

    /// Change selected fields of a student
    Update {
        id: i32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<i32>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        major: Option<String>,

        #[arg(long)]
        gpa: Option<f64>,
    },

    /// Replace a student record wholesale
    Replace {
        id: i32,
        name: String,
        age: i32,
        gender: String,
        major: String,
        gpa: f64,

        /// Give the record a new id
        #[arg(long)]
        new_id: Option<i32>,
    },

    /// Show one student
    Show { id: i32 },

    /// List students, optionally filtered
    #[command(group(ArgGroup::new("filter").args(["major", "min_gpa"])))]
    List {
        #[arg(long)]
        major: Option<String>,

        #[arg(long)]
        min_gpa: Option<f64>,
    },

    /// Search students by name fragment or exact major
    #[command(group(ArgGroup::new("by").required(true).args(["name", "major"])))]
    Search {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        major: Option<String>,
    },

    /// Print count, average and extreme GPAs
    Stats,

    /// Reorder the stored records
    Sort {
        #[arg(value_enum)]
        key: SortArg,
    },

    /// Remove every student
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Id,
    Name,
    Gpa,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => SortKey::Id,
            SortArg::Name => SortKey::Name,
            SortArg::Gpa => SortKey::Gpa,
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,studentdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder().data_file(&args.file).build();

    match Session::run(config, |store| execute(store, args.command)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(store: &mut StudentStore, command: Commands) -> Result<()> {
    match command {
        Commands::Add { id, name, age, gender, major, gpa } => {
            store.add(Student::new(id, name, age, gender, major, gpa))?;
            println!("Student {} added.", id);
        }
        Commands::Delete { id } => {
            let removed = store.delete(id)?;
            println!("Deleted: {}", removed);
        }
        Commands::Update { id, name, age, gender, major, gpa } => {
            let patch = StudentPatch { name, age, gender, major, gpa };
            let updated = store.patch(id, &patch)?;
            if patch.is_empty() {
                println!("Nothing to change.");
            } else {
                println!("Updated: {}", updated);
            }
        }
        Commands::Replace { id, name, age, gender, major, gpa, new_id } => {
            let student = Student::new(new_id.unwrap_or(id), name, age, gender, major, gpa);
            store.update(id, student)?;
            println!("Student {} replaced.", id);
        }
        Commands::Show { id } => match store.find(id) {
            Some(student) => println!("{}", student),
            None => println!("No student with id {}.", id),
        },
        Commands::List { major, min_gpa } => {
            let listing = match (major, min_gpa) {
                (Some(major), _) => store.list_by_major(&major),
                (None, Some(min_gpa)) => store.list_by_min_gpa(min_gpa),
                (None, None) => store.list_all().map(|all| all.iter().collect()),
            };
            match listing {
                Some(students) => print_table(students.iter().copied()),
                None if store.is_empty() => println!("No student data."),
                None => println!("No matching students."),
            }
        }
        Commands::Search { name, major } => {
            let results = match (name, major) {
                (Some(name), _) => store.search_by_name(&name),
                (None, Some(major)) => store.search_by_major(&major),
                (None, None) => Vec::new(),
            };
            if results.is_empty() {
                println!("No matching students.");
            } else {
                print_table(results.iter());
            }
        }
        Commands::Stats => println!("{}", store.statistics()),
        Commands::Sort { key } => {
            store.sort(key.into());
            print_table(store.iter());
        }
        Commands::Clear { yes } => {
            if !yes {
                println!("Refusing to clear without --yes.");
                return Ok(());
            }
            let removed = store.clear();
            println!("Removed {} students.", removed);
        }
    }
    Ok(())
}

fn print_table<'a>(students: impl Iterator<Item = &'a Student>) {
    let rule = "-".repeat(100);
    println!("{}", rule);
    let mut count = 0;
    for student in students {
        println!("{}", student);
        count += 1;
    }
    println!("{}", rule);
    println!("Total: {} students", count);
}
