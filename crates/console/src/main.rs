// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use florian_app::{
    DashboardView, ExportError, HoursReportView, MemberDetail, RECENT_OPERATIONS_FETCH_LIMIT,
    activity_badge, assemble_dashboard, assemble_hours_report, expiry_badge, hours_report_csv,
    member_detail, operation_label, search_equipment, search_members, search_operations,
    search_services, search_vehicles, sort_key_label, year_choices,
};
use florian_client::{
    AccountProfile, ClientError, EntityClient, EntityHandle, HttpBackend, Matcher, SortSpec,
    connect,
};
use florian_domain::{
    CredentialExpiry, DomainError, Equipment, EquipmentCategory, HoursSortKey, HoursTotals,
    Member, MemberStatus, Operation, OperationType, ReportYear, RosterBreakdown, Service,
    ServiceType, Vehicle, g26_expiry, roster_breakdown, test_track_expiry,
    validate_member_fields,
};
use time::{Date, OffsetDateTime};
use tracing::{info, warn};

/// Florian console for volunteer fire department administration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the hosted entity store
    #[arg(long, env = "FLORIAN_BASE_URL")]
    base_url: String,

    /// Bearer token of the signed-in session
    #[arg(long, env = "FLORIAN_TOKEN", hide_env_values = true)]
    token: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show counts, recent operations, and fleet status
    Dashboard,
    /// Render the yearly hours report
    Hours {
        /// Calendar year to report on, defaults to the current year
        #[arg(long)]
        year: Option<u16>,
        /// Sort key: total, service, or operation
        #[arg(long, default_value = "total")]
        sort: String,
        /// Keep members without any hours in the table
        #[arg(long)]
        include_zero: bool,
        /// Emit the report as CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// List the roster with hours and credential badges
    Members {
        /// Case-insensitive search over name and rank
        #[arg(long)]
        search: Option<String>,
    },
    /// List service records
    Services {
        /// Restrict to one service type, e.g. "Übungsdienst"
        #[arg(long = "type")]
        service_type: Option<String>,
        /// Case-insensitive search over title, location, and description
        #[arg(long)]
        search: Option<String>,
    },
    /// List operation records
    Operations {
        /// Restrict to one operation type, e.g. "Brandeinsatz"
        #[arg(long = "type")]
        operation_type: Option<String>,
        /// Case-insensitive search over location, number, and description
        #[arg(long)]
        search: Option<String>,
    },
    /// List the vehicle fleet
    Vehicles {
        /// Case-insensitive search over name, type, and license plate
        #[arg(long)]
        search: Option<String>,
    },
    /// List the equipment inventory
    Equipment {
        /// Restrict to one category, e.g. "Atemschutz"
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive search over name, inventory number, and location
        #[arg(long)]
        search: Option<String>,
    },
    /// Show roster statistics and the age distribution
    RosterOverview,
    /// Show credential expiry for breathing apparatus holders
    Credentials {
        /// Evaluate every member, not only breathing apparatus holders
        #[arg(long)]
        all: bool,
    },
    /// Add a member to the roster
    MemberAdd {
        /// Given name
        #[arg(long)]
        first_name: String,
        /// Family name
        #[arg(long)]
        last_name: String,
        /// Rank designation
        #[arg(long, default_value = "")]
        rank: String,
        /// Roster status: aktiv, inaktiv, or pensioniert
        #[arg(long, default_value = "aktiv")]
        status: String,
    },
    /// Change the roster status of a member
    MemberSetStatus {
        /// Store id of the member record
        #[arg(long)]
        id: String,
        /// New status: aktiv, inaktiv, or pensioniert
        #[arg(long)]
        status: String,
    },
    /// Remove a member from the roster
    MemberRemove {
        /// Store id of the member record
        #[arg(long)]
        id: String,
    },
    /// Show the account profile of the session
    Whoami,
}

#[derive(Debug)]
enum ConsoleError {
    Client(ClientError),
    Domain(DomainError),
    Export(ExportError),
    NotFound(String),
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client(error) => write!(f, "{error}"),
            Self::Domain(error) => write!(f, "{error}"),
            Self::Export(error) => write!(f, "{error}"),
            Self::NotFound(what) => write!(f, "Not found: {what}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<ClientError> for ConsoleError {
    fn from(error: ClientError) -> Self {
        Self::Client(error)
    }
}

impl From<DomainError> for ConsoleError {
    fn from(error: DomainError) -> Self {
        Self::Domain(error)
    }
}

impl From<ExportError> for ConsoleError {
    fn from(error: ExportError) -> Self {
        Self::Export(error)
    }
}

/// Calendar year of `today`, validated against the report year range.
fn current_year(today: Date) -> Result<u16, DomainError> {
    let year: u16 = u16::try_from(today.year())
        .map_err(|_| DomainError::InvalidReportYear(today.year().to_string()))?;
    Ok(year)
}

/// Report year to use, the explicit choice or the year of `today`.
fn report_year_for(year: Option<u16>, today: Date) -> Result<ReportYear, DomainError> {
    match year {
        Some(chosen) => ReportYear::new(chosen),
        None => ReportYear::new(current_year(today)?),
    }
}

/// Empty-state line for a listing, phrased for whether a filter was on.
fn empty_listing(noun: &str, filtered: bool) -> String {
    if filtered {
        format!("Keine {noun} gefunden")
    } else {
        format!("Noch keine {noun} erfasst")
    }
}

/// Badge text for an optional credential, "-" when none applies.
fn credential_cell(expiry: Option<&CredentialExpiry>) -> String {
    expiry.map_or_else(|| "-".to_string(), expiry_badge)
}

fn dashboard_text(view: &DashboardView) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "Kameraden: {}  Einsätze (Gesamt): {}  Fahrzeuge: {}  Ausrüstung: {}\n",
        view.member_count, view.operation_count, view.vehicle_count, view.equipment_count
    ));

    out.push_str("\nLetzte Einsätze:\n");
    if view.recent_operations.is_empty() {
        out.push_str("  Noch keine Einsätze erfasst\n");
    }
    for operation in &view.recent_operations {
        out.push_str(&format!(
            "  {:<14} {:<24} {:<18} {:<22} {:<10} {}\n",
            operation.label,
            operation.operation_type.as_str(),
            operation.date,
            operation.location,
            operation.severity.as_str(),
            operation.status.as_str(),
        ));
    }

    out.push_str("\nFahrzeugstatus:\n");
    if view.vehicle_glance.is_empty() {
        out.push_str("  Keine Fahrzeuge erfasst\n");
    }
    for vehicle in &view.vehicle_glance {
        out.push_str(&format!(
            "  {:<22} {:<16} {}\n",
            vehicle.name,
            vehicle.vehicle_type,
            vehicle.status.as_str()
        ));
    }

    if view.vehicles_in_maintenance > 0 {
        out.push_str(&format!(
            "\nWartung erforderlich: {} Fahrzeug(e) befinden sich aktuell in Wartung\n",
            view.vehicles_in_maintenance
        ));
    }
    out
}

fn hours_table(view: &HoursReportView) -> String {
    let mut out: String = String::new();
    if view.report.rows.is_empty() {
        out.push_str(&format!("Keine Daten für {} verfügbar\n", view.year));
        return out;
    }
    out.push_str(&format!(
        "{:>4}  {:<26} {:<20} {:>8} {:>14} {:>9} {:>15} {:>8}\n",
        "#", "Kamerad", "Dienstgrad", "Dienste", "Dienststunden", "Einsätze", "Einsatzstunden",
        "Gesamt"
    ));
    for (index, row) in view.report.rows.iter().enumerate() {
        let position: usize = index + 1;
        out.push_str(&format!(
            "{position:>4}  {:<26} {:<20} {:>8} {:>14.1} {:>9} {:>15.1} {:>8.1}\n",
            row.member_name,
            row.rank,
            row.service_count,
            row.service_hours,
            row.operation_count,
            row.operation_hours,
            row.total_hours,
        ));
    }
    let label: String = format!("Gesamt ({} Kameraden)", view.report.rows.len());
    let totals: &HoursTotals = &view.report.totals;
    out.push_str(&format!(
        "{:>4}  {label:<47} {:>8} {:>14.1} {:>9} {:>15.1} {:>8.1}\n",
        "",
        totals.service_count,
        totals.service_hours,
        totals.operation_count,
        totals.operation_hours,
        totals.total_hours,
    ));
    out
}

fn members_table(
    members: &[&Member],
    services: &[Service],
    year: ReportYear,
    today: Date,
) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "{:<26} {:<22} {:<12} {:>13} {:<14} {:<22} {:<22}\n",
        "Kamerad", "Dienstgrad", "Status", "Dienststunden", "Aktivität", "G26", "Strecke"
    ));
    for member in members {
        let detail: MemberDetail = member_detail(member, services, year, today);
        out.push_str(&format!(
            "{:<26} {:<22} {:<12} {:>13.1} {:<14} {:<22} {:<22}\n",
            detail.full_name,
            detail.rank,
            detail.status.as_str(),
            detail.service_hours,
            activity_badge(detail.activity),
            credential_cell(detail.g26.as_ref()),
            credential_cell(detail.test_track.as_ref()),
        ));
    }
    out
}

fn services_table(services: &[&Service]) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "{:<28} {:<24} {:<18} {:>6} {:<20} {:>11}\n",
        "Titel", "Art", "Datum", "Min.", "Ort", "Teilnehmer"
    ));
    for service in services {
        out.push_str(&format!(
            "{:<28} {:<24} {:<18} {:>6} {:<20} {:>11}\n",
            service.title,
            service.service_type.as_str(),
            service.date,
            service.duration_minutes,
            service.location.as_deref().unwrap_or("-"),
            service.participants.len(),
        ));
    }
    out
}

fn operations_table(operations: &[&Operation]) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "{:<14} {:<24} {:<18} {:<22} {:<12} {:<20} {:>6}\n",
        "Einsatz", "Art", "Datum", "Ort", "Schweregrad", "Status", "Min."
    ));
    for operation in operations {
        out.push_str(&format!(
            "{:<14} {:<24} {:<18} {:<22} {:<12} {:<20} {:>6}\n",
            operation_label(operation),
            operation.operation_type.as_str(),
            operation.date,
            operation.location,
            operation.severity.as_str(),
            operation.status.as_str(),
            operation.duration_minutes,
        ));
    }
    out
}

fn vehicles_table(vehicles: &[&Vehicle]) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "{:<22} {:<18} {:<14} {:<16} {:>7}\n",
        "Fahrzeug", "Typ", "Kennzeichen", "Status", "Baujahr"
    ));
    for vehicle in vehicles {
        out.push_str(&format!(
            "{:<22} {:<18} {:<14} {:<16} {:>7}\n",
            vehicle.name,
            vehicle.vehicle_type,
            vehicle.license_plate.as_deref().unwrap_or("-"),
            vehicle.status.as_str(),
            vehicle
                .year
                .map_or_else(|| "-".to_string(), |year| year.to_string()),
        ));
    }
    out
}

fn equipment_table(equipment: &[&Equipment]) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "{:<26} {:<18} {:<14} {:>6} {:<16} {:<18}\n",
        "Gerät", "Kategorie", "Inventar-Nr.", "Anzahl", "Status", "Ort"
    ));
    for item in equipment {
        out.push_str(&format!(
            "{:<26} {:<18} {:<14} {:>6} {:<16} {:<18}\n",
            item.name,
            item.category.as_str(),
            item.inventory_number.as_deref().unwrap_or("-"),
            item.quantity,
            item.status.as_str(),
            item.location.as_deref().unwrap_or("-"),
        ));
    }
    out
}

fn roster_text(breakdown: &RosterBreakdown) -> String {
    let mut out: String = String::new();
    out.push_str(&format!("Kameraden: {}\n", breakdown.total));
    out.push_str(&format!("Aktive Kameraden: {}\n", breakdown.active));
    out.push_str(&format!("Inaktive Kameraden: {}\n", breakdown.inactive));
    out.push_str(&format!("Pensionierte Kameraden: {}\n", breakdown.retired));
    if let Some(average) = breakdown.average_age {
        out.push_str(&format!("Ø Alter: {average} Jahre\n"));
    }
    if let (Some(youngest), Some(oldest)) = (breakdown.youngest_age, breakdown.oldest_age) {
        out.push_str(&format!(
            "Altersverteilung: Jüngster Kamerad {youngest} Jahre, Ältester Kamerad {oldest} Jahre\n"
        ));
    }
    out
}

fn credentials_text(members: &[Member], today: Date, all: bool) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "{:<26} {:<22} {:<22}\n",
        "Kamerad", "G26", "Strecke"
    ));
    for member in members {
        if !all && !member.has_breathing_apparatus_qualification() {
            continue;
        }
        out.push_str(&format!(
            "{:<26} {:<22} {:<22}\n",
            member.full_name(),
            credential_cell(g26_expiry(member, today).as_ref()),
            credential_cell(test_track_expiry(member, today).as_ref()),
        ));
    }
    out
}

fn roster_listing(members: &[Member]) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "{:<14} {:<26} {:<22} {:<12}\n",
        "Id", "Kamerad", "Dienstgrad", "Status"
    ));
    for member in members {
        out.push_str(&format!(
            "{:<14} {:<26} {:<22} {:<12}\n",
            member.id.as_deref().unwrap_or("-"),
            member.full_name(),
            member.rank,
            member.status.as_str(),
        ));
    }
    out
}

async fn run_dashboard(client: &EntityClient<HttpBackend>) -> Result<(), ConsoleError> {
    let sort: SortSpec = SortSpec::descending("date");
    let member_handle: EntityHandle<'_, Member, HttpBackend> = client.members();
    let operation_handle: EntityHandle<'_, Operation, HttpBackend> = client.operations();
    let vehicle_handle: EntityHandle<'_, Vehicle, HttpBackend> = client.vehicles();
    let equipment_handle: EntityHandle<'_, Equipment, HttpBackend> = client.equipment();
    let (members, operations, vehicles, equipment) = tokio::try_join!(
        member_handle.list(None, None),
        operation_handle.list(Some(&sort), Some(RECENT_OPERATIONS_FETCH_LIMIT)),
        vehicle_handle.list(None, None),
        equipment_handle.list(None, None),
    )?;

    let view: DashboardView = assemble_dashboard(&members, &operations, &vehicles, &equipment);
    print!("{}", dashboard_text(&view));
    Ok(())
}

async fn run_hours(
    client: &EntityClient<HttpBackend>,
    year: Option<u16>,
    sort: &str,
    include_zero: bool,
    csv: bool,
) -> Result<(), ConsoleError> {
    let today: Date = OffsetDateTime::now_utc().date();
    let report_year: ReportYear = report_year_for(year, today)?;
    let sort_key: HoursSortKey = sort.parse()?;

    let active: Matcher = Matcher::new().field("status", MemberStatus::Active.as_str());
    let member_handle: EntityHandle<'_, Member, HttpBackend> = client.members();
    let service_handle: EntityHandle<'_, Service, HttpBackend> = client.services();
    let operation_handle: EntityHandle<'_, Operation, HttpBackend> = client.operations();
    let (members, services, operations) = tokio::try_join!(
        member_handle.filter(&active),
        service_handle.list(None, None),
        operation_handle.list(None, None),
    )?;

    let view: HoursReportView = assemble_hours_report(
        &members,
        &services,
        &operations,
        report_year,
        sort_key,
        include_zero,
    );

    for skipped in &view.report.skipped {
        warn!(
            kind = skipped.kind.as_str(),
            record_id = %skipped.record_id,
            reason = %skipped.reason,
            "record skipped during aggregation"
        );
    }

    if csv {
        print!("{}", hours_report_csv(&view.report)?);
        return Ok(());
    }

    let choices: String = year_choices(current_year(today)?)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ");
    println!(
        "Geleistete Stunden {} (Sortierung: {}, wählbare Jahre: {})",
        view.year,
        sort_key_label(view.sort_key),
        choices
    );
    print!("{}", hours_table(&view));
    Ok(())
}

async fn run_members(
    client: &EntityClient<HttpBackend>,
    search: Option<&str>,
) -> Result<(), ConsoleError> {
    let sort: SortSpec = SortSpec::descending("created_date");
    let member_handle: EntityHandle<'_, Member, HttpBackend> = client.members();
    let service_handle: EntityHandle<'_, Service, HttpBackend> = client.services();
    let (members, services) = tokio::try_join!(
        member_handle.list(Some(&sort), None),
        service_handle.list(None, None),
    )?;

    let query: &str = search.unwrap_or_default();
    let found: Vec<&Member> = search_members(&members, query);
    if found.is_empty() {
        println!("{}", empty_listing("Kameraden", !query.is_empty()));
        return Ok(());
    }

    let today: Date = OffsetDateTime::now_utc().date();
    let year: ReportYear = report_year_for(None, today)?;
    print!("{}", members_table(&found, &services, year, today));
    Ok(())
}

async fn run_services(
    client: &EntityClient<HttpBackend>,
    type_filter: Option<&str>,
    search: Option<&str>,
) -> Result<(), ConsoleError> {
    let service_type: Option<ServiceType> = type_filter.map(str::parse).transpose()?;
    let sort: SortSpec = SortSpec::descending("date");
    let services: Vec<Service> = client.services().list(Some(&sort), None).await?;

    let query: &str = search.unwrap_or_default();
    let found: Vec<&Service> = search_services(&services, query, service_type);
    if found.is_empty() {
        println!(
            "{}",
            empty_listing("Dienste", !query.is_empty() || service_type.is_some())
        );
        return Ok(());
    }
    print!("{}", services_table(&found));
    Ok(())
}

async fn run_operations(
    client: &EntityClient<HttpBackend>,
    type_filter: Option<&str>,
    search: Option<&str>,
) -> Result<(), ConsoleError> {
    let operation_type: Option<OperationType> = type_filter.map(str::parse).transpose()?;
    let sort: SortSpec = SortSpec::descending("date");
    let operations: Vec<Operation> = client.operations().list(Some(&sort), None).await?;

    let query: &str = search.unwrap_or_default();
    let found: Vec<&Operation> = search_operations(&operations, query, operation_type);
    if found.is_empty() {
        println!(
            "{}",
            empty_listing("Einsätze", !query.is_empty() || operation_type.is_some())
        );
        return Ok(());
    }
    print!("{}", operations_table(&found));
    Ok(())
}

async fn run_vehicles(
    client: &EntityClient<HttpBackend>,
    search: Option<&str>,
) -> Result<(), ConsoleError> {
    let sort: SortSpec = SortSpec::descending("created_date");
    let vehicles: Vec<Vehicle> = client.vehicles().list(Some(&sort), None).await?;

    let query: &str = search.unwrap_or_default();
    let found: Vec<&Vehicle> = search_vehicles(&vehicles, query);
    if found.is_empty() {
        println!("{}", empty_listing("Fahrzeuge", !query.is_empty()));
        return Ok(());
    }
    print!("{}", vehicles_table(&found));
    Ok(())
}

async fn run_equipment(
    client: &EntityClient<HttpBackend>,
    category_filter: Option<&str>,
    search: Option<&str>,
) -> Result<(), ConsoleError> {
    let category: Option<EquipmentCategory> = category_filter.map(str::parse).transpose()?;
    let sort: SortSpec = SortSpec::descending("created_date");
    let equipment: Vec<Equipment> = client.equipment().list(Some(&sort), None).await?;

    let query: &str = search.unwrap_or_default();
    let found: Vec<&Equipment> = search_equipment(&equipment, query, category);
    if found.is_empty() {
        println!(
            "{}",
            empty_listing("Ausrüstung", !query.is_empty() || category.is_some())
        );
        return Ok(());
    }
    print!("{}", equipment_table(&found));
    Ok(())
}

async fn run_roster_overview(client: &EntityClient<HttpBackend>) -> Result<(), ConsoleError> {
    let members: Vec<Member> = client.members().list(None, None).await?;
    let today: Date = OffsetDateTime::now_utc().date();
    let breakdown: RosterBreakdown = roster_breakdown(&members, today);
    print!("{}", roster_text(&breakdown));
    Ok(())
}

async fn run_credentials(
    client: &EntityClient<HttpBackend>,
    all: bool,
) -> Result<(), ConsoleError> {
    let members: Vec<Member> = client.members().list(None, None).await?;
    let today: Date = OffsetDateTime::now_utc().date();
    print!("{}", credentials_text(&members, today, all));
    Ok(())
}

/// Prints the roster as stored after a mutation.
async fn print_roster(client: &EntityClient<HttpBackend>) -> Result<(), ConsoleError> {
    let sort: SortSpec = SortSpec::descending("created_date");
    let members: Vec<Member> = client.members().list(Some(&sort), None).await?;
    print!("{}", roster_listing(&members));
    Ok(())
}

async fn run_member_add(
    client: &EntityClient<HttpBackend>,
    first_name: String,
    last_name: String,
    rank: String,
    status: &str,
) -> Result<(), ConsoleError> {
    let status: MemberStatus = status.parse()?;
    let member: Member = Member {
        id: None,
        first_name,
        last_name,
        rank,
        status,
        qualifications: Vec::new(),
        email: None,
        phone: None,
        address: None,
        entry_date: None,
        birth_date: None,
        last_g26: None,
        g26_validity_years: None,
        last_test_track: None,
    };
    validate_member_fields(&member)?;

    let created: Member = client.members().create(&member).await?;
    info!(
        id = created.id.as_deref().unwrap_or_default(),
        name = %created.full_name(),
        "member created"
    );

    print_roster(client).await
}

async fn run_member_set_status(
    client: &EntityClient<HttpBackend>,
    id: &str,
    status: &str,
) -> Result<(), ConsoleError> {
    let status: MemberStatus = status.parse()?;
    let matcher: Matcher = Matcher::new().field("id", id);
    let mut matches: Vec<Member> = client.members().filter(&matcher).await?;
    let Some(mut member) = matches.pop() else {
        return Err(ConsoleError::NotFound(format!("member {id}")));
    };
    member.status = status;

    let updated: Member = client.members().update(id, &member).await?;
    info!(id, status = updated.status.as_str(), "member status changed");

    print_roster(client).await
}

async fn run_member_remove(
    client: &EntityClient<HttpBackend>,
    id: &str,
) -> Result<(), ConsoleError> {
    client.members().delete(id).await?;
    info!(id, "member removed");

    print_roster(client).await
}

async fn run_whoami(client: &EntityClient<HttpBackend>) -> Result<(), ConsoleError> {
    let profile: AccountProfile = client.me().await?;
    println!(
        "Angemeldet als: {} <{}> ({})",
        profile.full_name.as_deref().unwrap_or("-"),
        profile.email.as_deref().unwrap_or("-"),
        profile.role.as_deref().unwrap_or("-"),
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client: EntityClient<HttpBackend> = connect(&args.base_url, &args.token)?;

    match args.command {
        Command::Dashboard => run_dashboard(&client).await?,
        Command::Hours {
            year,
            sort,
            include_zero,
            csv,
        } => run_hours(&client, year, &sort, include_zero, csv).await?,
        Command::Members { search } => run_members(&client, search.as_deref()).await?,
        Command::Services {
            service_type,
            search,
        } => run_services(&client, service_type.as_deref(), search.as_deref()).await?,
        Command::Operations {
            operation_type,
            search,
        } => run_operations(&client, operation_type.as_deref(), search.as_deref()).await?,
        Command::Vehicles { search } => run_vehicles(&client, search.as_deref()).await?,
        Command::Equipment { category, search } => {
            run_equipment(&client, category.as_deref(), search.as_deref()).await?;
        }
        Command::RosterOverview => run_roster_overview(&client).await?,
        Command::Credentials { all } => run_credentials(&client, all).await?,
        Command::MemberAdd {
            first_name,
            last_name,
            rank,
            status,
        } => run_member_add(&client, first_name, last_name, rank, &status).await?,
        Command::MemberSetStatus { id, status } => {
            run_member_set_status(&client, &id, &status).await?;
        }
        Command::MemberRemove { id } => run_member_remove(&client, &id).await?,
        Command::Whoami => run_whoami(&client).await?,
    }

    Ok(())
}
