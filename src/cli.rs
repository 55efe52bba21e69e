use clap::{Parser, Subcommand};
use inquire::{Confirm, Select};
use medSchedule::handlers::session::{SessionEngine, UiEvent};
use medSchedule::models::appointment::AppointmentType;
use medSchedule::models::preferences::Theme;
use medSchedule::runtime::dispatch;
use medSchedule::service::booking::PatientDetails;
use medSchedule::service::calendar::{MonthCursor, build_month_grid, parse_date_key};
use medSchedule::service::reviews::ReviewForm;
use medSchedule::service::slots::{SlotPicker, SlotTarget};
use medSchedule::service::translation::Locale;
use medSchedule::state::AppState;
use medSchedule::view::appointments::{render_appointments, render_booking_summary};
use medSchedule::view::calendar::render_month;
use medSchedule::view::doctors::{
    render_doctor_detail, render_doctors, render_favorites, render_specialties,
};
use medSchedule::view::slots::render_slots;

#[derive(Parser)]
#[command(name = "medSchedule", about = "Find doctors and manage appointments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Specialties,
    Doctors {
        #[arg(long)]
        specialty: Option<i64>,
        #[arg(long)]
        search: Option<String>,
    },
    Doctor {
        id: i64,
    },
    Slots {
        doctor: i64,
        date: String,
    },
    Calendar {
        #[arg(long, requires = "month")]
        year: Option<i32>,
        #[arg(long, requires = "year")]
        month: Option<u32>,
        #[arg(long)]
        selected: Option<String>,
    },
    Book {
        doctor: i64,
        date: String,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        reason: String,
        #[arg(long = "type", default_value = "in-person")]
        appointment_type: AppointmentType,
    },
    SignIn {
        email: String,
    },
    SignOut,
    Appointments,
    Upcoming,
    Cancel {
        id: i64,
    },
    Reschedule {
        id: i64,
        date: String,
        #[arg(long)]
        time: Option<String>,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        months_ahead: i32,
    },
    Review {
        appointment: i64,
        doctor: i64,
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
    Favorite {
        doctor: i64,
    },
    Favorites,
    Language {
        language: Locale,
    },
    Theme {
        theme: Option<Theme>,
    },
}

pub async fn cli(engine: SessionEngine) {
    let cli = Cli::parse();
    if let Err(e) = run(&engine, cli.command).await {
        println!("Failed to run command: {}", e);
    }
}

async fn run(engine: &SessionEngine, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Specialties => {
            let state = dispatch(engine, vec![UiEvent::LoadSpecialties]).await;
            println!("{}", render_specialties(&state.specialties, &state.translator()));
        }
        Commands::Doctors { specialty, search } => {
            let state = dispatch(
                engine,
                vec![
                    UiEvent::LoadDoctors { specialty_id: specialty },
                    UiEvent::LoadFavorites,
                    UiEvent::FilterChanged {
                        specialty_id: specialty,
                        search,
                    },
                ],
            )
            .await;
            println!("{}", render_doctors(&state.visible_doctors(), &state.translator()));
        }
        Commands::Doctor { id } => {
            let state = dispatch(engine, vec![UiEvent::ShowDoctor { doctor_id: id }]).await;
            if let Some(detail) = &state.doctor_detail {
                println!("{}", render_doctor_detail(detail, &state.translator()));
            }
        }
        Commands::Slots { doctor, date } => {
            let state = dispatch(
                engine,
                vec![
                    UiEvent::OpenBooking { doctor_id: doctor },
                    UiEvent::SelectDate {
                        target: SlotTarget::Booking,
                        date,
                    },
                    UiEvent::Settle,
                ],
            )
            .await;
            if let Some(picker) = state.picker(SlotTarget::Booking) {
                println!("{}", render_slots(picker, &state.translator()));
            }
        }
        Commands::Calendar {
            year,
            month,
            selected,
        } => {
            let today = engine.today();
            let cursor = match (year, month) {
                (Some(year), Some(month)) => MonthCursor::new(year, month)
                    .ok_or_else(|| format!("Invalid month {year}-{month}"))?,
                _ => MonthCursor::containing(
                    selected.as_deref().and_then(parse_date_key).unwrap_or(today),
                ),
            };
            let state = engine.snapshot().await;
            let grid = build_month_grid(cursor, today, selected.as_deref());
            println!("{}", render_month(&grid, &state.translator()));
        }
        Commands::Book {
            doctor,
            date,
            time,
            first_name,
            last_name,
            email,
            phone,
            reason,
            appointment_type,
        } => {
            let state = dispatch(
                engine,
                vec![
                    UiEvent::OpenBooking { doctor_id: doctor },
                    UiEvent::SelectAppointmentType(appointment_type),
                    UiEvent::SelectDate {
                        target: SlotTarget::Booking,
                        date,
                    },
                    UiEvent::Settle,
                ],
            )
            .await;
            let Some(picker) = state.picker(SlotTarget::Booking) else {
                return Ok(());
            };
            let mut events = Vec::new();
            if let Some(date_time) = pick_time(&state, picker, time)? {
                events.push(UiEvent::SelectTime {
                    target: SlotTarget::Booking,
                    date_time,
                });
            }
            events.push(UiEvent::SubmitBooking(PatientDetails {
                first_name,
                last_name,
                email,
                phone,
                reason,
            }));
            let state = dispatch(engine, events).await;
            if let Some(summary) = &state.last_booking {
                println!("{}", render_booking_summary(summary, &state.translator()));
            }
        }
        Commands::SignIn { email } => {
            dispatch(engine, vec![UiEvent::SignIn { email }, UiEvent::CheckUpcoming]).await;
        }
        Commands::SignOut => {
            dispatch(engine, vec![UiEvent::SignOut]).await;
        }
        Commands::Appointments => {
            let state = dispatch(engine, vec![UiEvent::LoadAppointments, UiEvent::CheckUpcoming])
                .await;
            if state.patient_email().is_some() {
                println!("{}", render_appointments(&state.appointments, &state.translator()));
            }
        }
        Commands::Upcoming => {
            dispatch(engine, vec![UiEvent::CheckUpcoming]).await;
        }
        Commands::Cancel { id } => {
            let question = engine.snapshot().await.translator().t("modal.cancel.confirm");
            if Confirm::new(&question).with_default(false).prompt()? {
                let state = dispatch(engine, vec![UiEvent::CancelAppointment { appointment_id: id }])
                    .await;
                println!("{}", render_appointments(&state.appointments, &state.translator()));
            }
        }
        Commands::Reschedule {
            id,
            date,
            time,
            months_ahead,
        } => {
            let state = dispatch(
                engine,
                vec![
                    UiEvent::OpenReschedule { appointment_id: id },
                    UiEvent::ChangeRescheduleMonth {
                        delta: months_ahead,
                    },
                    UiEvent::SelectDate {
                        target: SlotTarget::Reschedule,
                        date,
                    },
                    UiEvent::Settle,
                ],
            )
            .await;
            if let Some(grid) = state.reschedule_grid(engine.today()) {
                println!("{}", render_month(&grid, &state.translator()));
            }
            let Some(picker) = state.picker(SlotTarget::Reschedule) else {
                return Ok(());
            };
            let mut events = Vec::new();
            if let Some(date_time) = pick_time(&state, picker, time)? {
                events.push(UiEvent::SelectTime {
                    target: SlotTarget::Reschedule,
                    date_time,
                });
            }
            events.push(UiEvent::SubmitReschedule);
            let state = dispatch(engine, events).await;
            println!("{}", render_appointments(&state.appointments, &state.translator()));
        }
        Commands::Review {
            appointment,
            doctor,
            rating,
            comment,
        } => {
            dispatch(
                engine,
                vec![UiEvent::SubmitReview(ReviewForm {
                    appointment_id: appointment,
                    doctor_id: doctor,
                    rating,
                    comment,
                })],
            )
            .await;
        }
        Commands::Favorite { doctor } => {
            dispatch(
                engine,
                vec![
                    UiEvent::LoadFavorites,
                    UiEvent::ToggleFavorite { doctor_id: doctor },
                ],
            )
            .await;
        }
        Commands::Favorites => {
            let state = dispatch(
                engine,
                vec![UiEvent::LoadDoctors { specialty_id: None }, UiEvent::LoadFavorites],
            )
            .await;
            let translator = state.translator();
            if state.patient_email().is_none() {
                println!("{}", translator.t("favorites.signin"));
            } else {
                println!("{}", render_favorites(&state.doctors, &translator));
            }
        }
        Commands::Language { language } => {
            dispatch(engine, vec![UiEvent::SetLanguage(language)]).await;
        }
        Commands::Theme { theme } => {
            dispatch(engine, vec![UiEvent::SetTheme(theme)]).await;
        }
    }
    Ok(())
}

/// Resolves `--time` against the offered slots (ISO value or display time),
/// otherwise prompts. `None` leaves the slot unset so submission reports it.
fn pick_time(
    state: &AppState,
    picker: &SlotPicker,
    time: Option<String>,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let slots = picker.slots();
    if let Some(time) = time {
        let resolved = slots
            .iter()
            .find(|slot| slot.iso_date_time == time || slot.display_time == time)
            .map(|slot| slot.iso_date_time.clone())
            .unwrap_or(time);
        return Ok(Some(resolved));
    }
    let translator = state.translator();
    if slots.is_empty() {
        println!("{}", render_slots(picker, &translator));
        return Ok(None);
    }
    let labels: Vec<String> = slots.iter().map(|slot| slot.display_time.clone()).collect();
    let choice = Select::new(&translator.t("slots.select"), labels).raw_prompt()?;
    Ok(slots.get(choice.index).map(|slot| slot.iso_date_time.clone()))
}
