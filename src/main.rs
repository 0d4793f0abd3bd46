use clap::Parser;
use crewboard::application::{import_posts, publish_post, Board, ConfigService, InitService};
use crewboard::cli::commands::job_filter;
use crewboard::cli::{
    format_airline, format_airline_list, format_job, format_job_list, format_post,
    format_post_list, AdminCommand, AirlineCommand, BlogCommand, Cli, Commands, JobCommand,
};
use crewboard::domain::filter::{job_matches_search, posts_with_tag, search_airlines};
use crewboard::domain::{Airline, AirlineDraft, BlogDraft, BlogPost, Job, JobDraft, Record};
use crewboard::error::{CrewboardError, Result};
use crewboard::infrastructure::BoardRepository;
use crewboard::logging::{init_logging, Verbosity};
use std::io::Read;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let config = InitService::execute(&path)?;
            println!("Initialized crewboard at {}", path.display());
            println!("Admin passphrase: {}", config.admin_passphrase);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(BoardRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("admin_passphrase = {}", config.admin_passphrase);
                println!("slug_policy = {}", config.slug_policy);
                println!("on_corrupt_data = {}", config.on_corrupt_data);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: crewboard config [--list | <key> [<value>]]");
                println!("Valid keys: admin_passphrase, slug_policy, on_corrupt_data, created");
            }
            Ok(())
        }
        Commands::Jobs { command } => {
            let mut board = Board::open(&BoardRepository::discover()?)?;
            run_jobs(&mut board, command)
        }
        Commands::Airlines { command } => {
            let mut board = Board::open(&BoardRepository::discover()?)?;
            run_airlines(&mut board, command)
        }
        Commands::Blog { command } => {
            let mut board = Board::open(&BoardRepository::discover()?)?;
            run_blog(&mut board, command)
        }
        Commands::Admin { command } => {
            let board = Board::open(&BoardRepository::discover()?)?;
            let gate = board.admin();
            match command {
                AdminCommand::Login { code } => {
                    if gate.login(&code)? {
                        println!("Admin area unlocked");
                        Ok(())
                    } else {
                        Err(CrewboardError::InvalidAccessCode)
                    }
                }
                AdminCommand::Logout => {
                    gate.logout()?;
                    println!("Admin area locked");
                    Ok(())
                }
                AdminCommand::Status => {
                    if gate.is_unlocked()? {
                        println!("unlocked");
                    } else {
                        println!("locked");
                    }
                    Ok(())
                }
            }
        }
    }
}

fn run_jobs(board: &mut Board, command: JobCommand) -> Result<()> {
    match command {
        JobCommand::List {
            airline,
            contract,
            location,
            search,
        } => {
            let filtered = job_filter(airline, contract, location).apply(board.jobs.list());
            let jobs = match search {
                Some(query) => filtered
                    .into_iter()
                    .filter(|job| job_matches_search(job, &query))
                    .collect(),
                None => filtered,
            };
            print!("{}", with_newline(format_job_list(&jobs)));
            Ok(())
        }
        JobCommand::Show { key } => {
            let job = board
                .jobs
                .find(&key)
                .ok_or_else(|| not_found::<Job>(&key))?;
            print!("{}", format_job(job));
            Ok(())
        }
        JobCommand::Add(args) => {
            board.admin().require_unlocked()?;
            let job = board.jobs.add(args.apply(JobDraft::default()).prepare())?;
            println!("Added job {} ({})", job.id, job.slug);
            Ok(())
        }
        JobCommand::Update { id, fields } => {
            board.admin().require_unlocked()?;
            let Some(existing) = board.jobs.get(&id).map(Record::to_draft) else {
                report_update("job", &id, false);
                return Ok(());
            };
            let draft = fields.apply(existing.clone()).refresh_derived(&existing);
            report_update("job", &id, board.jobs.update(&id, draft.prepare())?);
            Ok(())
        }
        JobCommand::Delete { id } => {
            board.admin().require_unlocked()?;
            report_delete("job", &id, board.jobs.delete(&id)?);
            Ok(())
        }
    }
}

fn run_airlines(board: &mut Board, command: AirlineCommand) -> Result<()> {
    match command {
        AirlineCommand::List { search } => {
            let airlines = match search {
                Some(query) => search_airlines(board.airlines.list(), &query),
                None => board.airlines.list().iter().collect(),
            };
            print!("{}", with_newline(format_airline_list(&airlines)));
            Ok(())
        }
        AirlineCommand::Show { key } => {
            let airline = board
                .airlines
                .find(&key)
                .ok_or_else(|| not_found::<Airline>(&key))?;
            print!("{}", format_airline(airline));
            Ok(())
        }
        AirlineCommand::Add(args) => {
            board.admin().require_unlocked()?;
            let airline = board
                .airlines
                .add(args.apply(AirlineDraft::default()).prepare())?;
            println!("Added airline {} ({})", airline.id, airline.slug);
            Ok(())
        }
        AirlineCommand::Update { id, fields } => {
            board.admin().require_unlocked()?;
            let Some(existing) = board.airlines.get(&id).map(Record::to_draft) else {
                report_update("airline", &id, false);
                return Ok(());
            };
            let draft = fields.apply(existing.clone()).refresh_derived(&existing);
            report_update("airline", &id, board.airlines.update(&id, draft.prepare())?);
            Ok(())
        }
        AirlineCommand::Delete { id } => {
            board.admin().require_unlocked()?;
            report_delete("airline", &id, board.airlines.delete(&id)?);
            Ok(())
        }
    }
}

fn run_blog(board: &mut Board, command: BlogCommand) -> Result<()> {
    match command {
        BlogCommand::List { tag } => {
            let posts = match tag {
                Some(tag) => posts_with_tag(board.posts.list(), &tag),
                None => board.posts.list().iter().collect(),
            };
            print!("{}", with_newline(format_post_list(&posts)));
            Ok(())
        }
        BlogCommand::Show { key } => {
            let post = board
                .posts
                .find(&key)
                .ok_or_else(|| not_found::<BlogPost>(&key))?;
            print!("{}", format_post(post));
            Ok(())
        }
        BlogCommand::Add(args) => {
            board.admin().require_unlocked()?;
            let content = read_content(args.content.clone(), args.content_file.as_deref())?;
            let id = publish_post(&mut board.posts, args.apply(content, BlogDraft::default()))?;
            println!("Published post {}", id);
            Ok(())
        }
        BlogCommand::Update { id, fields } => {
            board.admin().require_unlocked()?;
            let Some(existing) = board.posts.get(&id).map(Record::to_draft) else {
                report_update("post", &id, false);
                return Ok(());
            };
            let content = read_content(fields.content.clone(), fields.content_file.as_deref())?;
            let draft = fields
                .apply(content, existing.clone())
                .refresh_derived(&existing);
            report_update("post", &id, board.posts.update(&id, draft.prepare())?);
            Ok(())
        }
        BlogCommand::Delete { id } => {
            board.admin().require_unlocked()?;
            report_delete("post", &id, board.posts.delete(&id)?);
            Ok(())
        }
        BlogCommand::Import { file } => {
            board.admin().require_unlocked()?;
            let text = if file.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&file)?
            };
            let count = import_posts(&mut board.posts, &text)?;
            println!("Imported {} posts", count);
            Ok(())
        }
    }
}

fn read_content(inline: Option<String>, file: Option<&Path>) -> Result<Option<String>> {
    match file {
        Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
        None => Ok(inline),
    }
}

fn not_found<R: Record>(key: &str) -> CrewboardError {
    CrewboardError::RecordNotFound {
        kind: R::KIND,
        key: key.to_string(),
    }
}

fn report_update(kind: &str, id: &str, updated: bool) {
    if updated {
        println!("Updated {} {}", kind, id);
    } else {
        println!("No {} with id {}; nothing updated", kind, id);
    }
}

fn report_delete(kind: &str, id: &str, deleted: bool) {
    if deleted {
        println!("Deleted {} {}", kind, id);
    } else {
        println!("No {} with id {}; nothing deleted", kind, id);
    }
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
