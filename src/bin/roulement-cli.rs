#![forbid(unsafe_code)]
use anyhow::{anyhow, Context, Result};
use roulement::{
    io,
    model::{Person, Roster, WeekRotation},
    render::{RotationRenderer, TextTable},
    rotation::{RotationOptions, Rotator},
    storage::{JsonStorage, Storage, WeekStore},
    time::{self, parse_weekday, weekday_name, ShiftTime},
};
use chrono::Weekday;
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de rotation horaire (dehors / dedans / volant)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'équipe
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    /// Répertoire des rotations sauvegardées
    #[arg(long, global = true, default_value = "rotations")]
    store: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une personne (semaine par défaut : lun-ven 07:00-15:00)
    AddPerson {
        #[arg(long)]
        name: String,
    },

    /// Retirer une personne
    RemovePerson {
        #[arg(long)]
        name: String,
    },

    /// Modifier l'horaire d'un jour
    SetDay {
        #[arg(long)]
        name: String,
        /// monday, tue, ...
        #[arg(long)]
        day: String,
        /// HH:MM
        #[arg(long)]
        start: Option<String>,
        /// HH:MM
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        present: Option<bool>,
        #[arg(long)]
        off: Option<bool>,
    },

    /// Recopier l'horaire d'un jour sur toute la semaine
    CopyDay {
        #[arg(long)]
        name: String,
        #[arg(long)]
        day: String,
    },

    /// Importer des personnes depuis un CSV
    ImportPeople {
        #[arg(long)]
        csv: String,
    },

    /// Lister l'équipe et ses horaires
    List,

    /// Générer la rotation d'un jour (ou de sa semaine avec --week)
    Generate {
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long)]
        week: bool,
        #[arg(long, default_value_t = 7)]
        first_hour: u8,
        #[arg(long, default_value_t = 22)]
        last_hour: u8,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Enregistre le résultat dans le répertoire de rotations
        #[arg(long)]
        save: bool,
    },

    /// Afficher une semaine enregistrée (n'importe quelle date de la semaine)
    Show {
        #[arg(long)]
        week: String,
    },

    /// Supprimer une semaine enregistrée
    DeleteWeek {
        #[arg(long)]
        week: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;
    let store = WeekStore::new(&cli.store);
    let mut roster = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::AddPerson { name } => {
            let id = roster.insert(Person::new(name))?;
            storage.save(&roster)?;
            println!("{}", id.as_str());
            0
        }
        Commands::RemovePerson { name } => {
            let id = roster.person(&name)?.id.clone();
            roster.remove(&id);
            storage.save(&roster)?;
            0
        }
        Commands::SetDay {
            name,
            day,
            start,
            end,
            present,
            off,
        } => {
            let day = weekday(&day)?;
            let person = roster.person_mut(&name)?;
            let schedule = person.weekly_schedule.day_mut(day);
            if let Some(raw) = start {
                schedule.shift_start = ShiftTime::parse(&raw)?;
            }
            if let Some(raw) = end {
                schedule.shift_end = ShiftTime::parse(&raw)?;
            }
            if let Some(flag) = present {
                schedule.is_present = flag;
            }
            if let Some(flag) = off {
                schedule.is_off = flag;
            }
            storage.save(&roster)?;
            0
        }
        Commands::CopyDay { name, day } => {
            let day = weekday(&day)?;
            let person = roster.person_mut(&name)?;
            person.weekly_schedule.copy_day_to_week(day);
            storage.save(&roster)?;
            0
        }
        Commands::ImportPeople { csv } => {
            let people = io::import_people_csv(&csv)
                .with_context(|| format!("importing people from {csv}"))?;
            let count = people.len();
            roster
                .insert_all(people)
                .with_context(|| format!("importing people from {csv}"))?;
            println!("imported {count} person(s)");
            storage.save(&roster)?;
            0
        }
        Commands::List => {
            print_roster(&roster);
            0
        }
        Commands::Generate {
            date,
            week,
            first_hour,
            last_hour,
            out_json,
            out_csv,
            save,
        } => {
            let date = time::parse_date(&date)?;
            let rotator = Rotator::new(RotationOptions {
                first_hour,
                last_hour,
            })?;
            let generated = if week {
                rotator.week(&roster.people, date)
            } else {
                let mut w = WeekRotation::new(time::week_start(date));
                w.days.insert(date, rotator.day(&roster.people, date));
                w
            };

            if let Some(path) = out_json {
                io::export_week_json(path, &generated)?;
            }
            if let Some(path) = out_csv {
                io::export_week_csv(path, &generated)?;
            }
            if save {
                // une génération d'un seul jour complète la semaine déjà enregistrée
                let mut stored = if store.exists(generated.week_start) {
                    store.load(generated.week_start)?
                } else {
                    WeekRotation::new(generated.week_start)
                };
                stored.days.extend(generated.days.clone());
                let path = store.save(&stored)?;
                eprintln!("saved {}", path.display());
            }
            print!("{}", TextTable.render_week(&generated));
            0
        }
        Commands::Show { week } => {
            let monday = time::week_start(time::parse_date(&week)?);
            let stored = store.load(monday)?;
            print!("{}", TextTable.render_week(&stored));
            0
        }
        Commands::DeleteWeek { week } => {
            let monday = time::week_start(time::parse_date(&week)?);
            if store.delete(monday)? {
                println!("deleted week {monday}");
                0
            } else {
                eprintln!("no rotation stored for week {monday}");
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}

fn weekday(raw: &str) -> Result<Weekday> {
    parse_weekday(raw).ok_or_else(|| anyhow!("invalid day: {raw}"))
}

fn print_roster(roster: &Roster) {
    const DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    for p in &roster.people {
        let days: Vec<String> = DAYS
            .iter()
            .map(|d| {
                let s = p.weekly_schedule.day(*d);
                let label = &weekday_name(*d)[..3];
                if s.is_available() {
                    format!("{label} {}-{}", s.shift_start, s.shift_end)
                } else {
                    format!("{label} off")
                }
            })
            .collect();
        println!("{} | {} | {}", p.id.as_str(), p.name, days.join(" | "));
    }
}
