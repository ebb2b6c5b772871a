//! Printable layouts of an expanded travel order.
//!
//! Two documents are produced: the assignment letter ("Surat Tugas"), which
//! lists every participant, and the one-page travel order form ("SPPD Lembar
//! 1"), whose personnel block has room for the team lead and one member only.
//! Both are read-only views built from a [`TravelOrderDetail`].

mod format;

pub use format::{escape_html, long_date, short_date};

use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::OfficeProfile;
use crate::models::{EmployeeSummary, ParticipantRole, TravelOrderDetail};

const PRINT_STYLE: &str = "body{font-family:'Times New Roman',serif;margin:0}\
.page{max-width:800px;margin:0 auto;padding:48px}\
.center{text-align:center}.right{text-align:right}\
table{width:100%;border-collapse:collapse}td{padding:2px 4px;vertical-align:top}\
.sign{display:flex;justify-content:space-between;margin-top:48px}\
.sign div{width:45%;text-align:center}.gap{height:64px}\
.no-print{position:fixed;bottom:16px;right:16px}\
@media print{.no-print{display:none!important}}";

/// One participant line on the assignment letter.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignedPerson {
    pub name: String,
    pub service_number: String,
    pub position: String,
    pub pay_grade: String,
    pub role: ParticipantRole,
}

/// Signature block of the signing official.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Signatory {
    pub name: String,
    pub position: String,
    pub service_number: String,
}

impl From<&EmployeeSummary> for Signatory {
    fn from(employee: &EmployeeSummary) -> Self {
        Self {
            name: employee.name.clone(),
            position: employee.position.clone(),
            service_number: employee.service_number.clone(),
        }
    }
}

/// Trip particulars shared by both layouts.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub purpose: String,
    pub legal_basis: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub duration_days: i64,
    pub transport: String,
}

impl TripDetails {
    fn from_detail(detail: &TravelOrderDetail) -> Self {
        let order = &detail.order;
        Self {
            purpose: order.purpose.clone(),
            legal_basis: order.legal_basis.clone(),
            origin: order.origin.clone(),
            destination: order.destination.clone(),
            departure_date: order.departure_date,
            return_date: order.return_date,
            duration_days: detail.duration_days,
            transport: order.transport_mode.label().to_string(),
        }
    }
}

/// The formal "Surat Tugas" layout.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentLetter {
    pub order_number: String,
    pub participants: Vec<AssignedPerson>,
    pub trip: TripDetails,
    pub signatory: Option<Signatory>,
    pub signed_on: NaiveDate,
}

impl AssignmentLetter {
    pub fn build(detail: &TravelOrderDetail, signed_on: NaiveDate) -> Self {
        let participants = detail
            .participants
            .iter()
            .map(|p| AssignedPerson {
                name: p.employee.name.clone(),
                service_number: p.employee.service_number.clone(),
                position: p.employee.position.clone(),
                pay_grade: p.employee.pay_grade.clone(),
                role: p.role,
            })
            .collect();

        Self {
            order_number: detail.order.order_number.clone(),
            participants,
            trip: TripDetails::from_detail(detail),
            signatory: detail.signing_official.as_ref().map(Signatory::from),
            signed_on,
        }
    }

    pub fn render_html(&self, office: &OfficeProfile) -> String {
        let mut html = String::new();
        let trip = &self.trip;
        page_open(&mut html, &format!("Surat Tugas - {}", self.order_number));

        let _ = write!(
            html,
            "<div class=\"center\" style=\"border-bottom:2px solid #000;padding-bottom:16px;margin-bottom:32px\">\
             <h1 style=\"text-transform:uppercase;font-size:20px;margin:0\">{}</h1>\
             <h2 style=\"text-transform:uppercase;font-size:18px;margin:0\">{}</h2>\
             <p>{}</p></div>",
            escape_html(&office.agency_name),
            escape_html(&office.office_name),
            escape_html(&office.office_address),
        );
        let _ = write!(
            html,
            "<div class=\"center\"><h2 style=\"text-decoration:underline\">SURAT TUGAS</h2>\
             <p>Nomor: {}</p></div>",
            escape_html(&self.order_number),
        );
        let _ = write!(
            html,
            "<p>Menimbang demi terselenggaranya tugas pokok {}, dengan ini ditugaskan kepada:</p><ol>",
            escape_html(&office.office_name),
        );
        for person in &self.participants {
            let _ = write!(
                html,
                "<li>Nama: <strong>{}</strong><br>NIP: {}<br>Jabatan: {}<br>Peran: {}</li>",
                escape_html(&person.name),
                escape_html(&person.service_number),
                escape_html(&person.position),
                person.role.label(),
            );
        }
        html.push_str("</ol><p>Untuk melaksanakan tugas perjalanan dinas dengan rincian sebagai berikut:</p>");
        let _ = write!(
            html,
            "<table><tr><td>a.</td><td>Maksud perjalanan</td><td>: {}</td></tr>\
             <tr><td>b.</td><td>Tempat berangkat</td><td>: {}</td></tr>\
             <tr><td>c.</td><td>Tempat tujuan</td><td>: {}</td></tr>\
             <tr><td>d.</td><td>Tanggal berangkat</td><td>: {}</td></tr>\
             <tr><td>e.</td><td>Tanggal kembali</td><td>: {}</td></tr>\
             <tr><td>f.</td><td>Lama perjalanan</td><td>: {} hari</td></tr>\
             <tr><td>g.</td><td>Jenis angkutan</td><td>: {}</td></tr></table>",
            escape_html(&trip.purpose),
            escape_html(&trip.origin),
            escape_html(&trip.destination),
            long_date(trip.departure_date),
            long_date(trip.return_date),
            trip.duration_days,
            escape_html(&trip.transport),
        );
        html.push_str(
            "<p>Demikian surat tugas ini dibuat untuk dilaksanakan dengan penuh tanggung jawab.</p>",
        );

        let _ = write!(
            html,
            "<div class=\"sign\"><div></div><div><p>{}, {}</p><p>Pejabat Penandatangan</p><div class=\"gap\"></div>",
            escape_html(&office.city),
            long_date(self.signed_on),
        );
        if let Some(signatory) = &self.signatory {
            let _ = write!(
                html,
                "<p><strong><u>{}</u></strong></p><p>{}</p><p>NIP. {}</p>",
                escape_html(&signatory.name),
                escape_html(&signatory.position),
                escape_html(&signatory.service_number),
            );
        }
        html.push_str("</div></div>");

        page_close(&mut html, "Cetak Surat");
        html
    }
}

/// One column of the personnel block.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelColumn {
    pub name: String,
    pub service_number: String,
    pub pay_grade: String,
    pub position: String,
}

impl From<&EmployeeSummary> for PersonnelColumn {
    fn from(employee: &EmployeeSummary) -> Self {
        Self {
            name: employee.name.clone(),
            service_number: employee.service_number.clone(),
            pay_grade: employee.pay_grade.clone(),
            position: employee.position.clone(),
        }
    }
}

/// The one-page "SPPD Lembar 1" layout.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelOrderForm {
    pub order_number: String,
    /// First participant with the team lead role
    pub team_lead: Option<PersonnelColumn>,
    /// First participant with the member role
    pub member: Option<PersonnelColumn>,
    /// Members beyond the first, which the fixed layout cannot show
    pub omitted_members: usize,
    pub trip: TripDetails,
    pub signatory: Option<Signatory>,
    pub signed_on: NaiveDate,
}

impl TravelOrderForm {
    pub fn build(detail: &TravelOrderDetail, signed_on: NaiveDate) -> Self {
        let team_lead = detail
            .participants
            .iter()
            .find(|p| p.role == ParticipantRole::TeamLead)
            .map(|p| PersonnelColumn::from(&p.employee));
        let mut members = detail
            .participants
            .iter()
            .filter(|p| p.role == ParticipantRole::Member);
        let member = members.next().map(|p| PersonnelColumn::from(&p.employee));

        Self {
            order_number: detail.order.order_number.clone(),
            team_lead,
            member,
            omitted_members: members.count(),
            trip: TripDetails::from_detail(detail),
            signatory: detail.signing_official.as_ref().map(Signatory::from),
            signed_on,
        }
    }

    pub fn render_html(&self, office: &OfficeProfile) -> String {
        let mut html = String::new();
        let trip = &self.trip;
        page_open(&mut html, &format!("SPPD Lembar 1 - {}", self.order_number));

        html.push_str(
            "<div style=\"border:2px solid #000;padding:24px\">\
             <div class=\"center\" style=\"border-bottom:1px solid #000;margin-bottom:16px\">\
             <h1 style=\"font-size:18px;margin:0\">SURAT PERINTAH PERJALANAN DINAS</h1><p>SPPD</p></div>",
        );

        // The personnel block is only printed when a team lead exists.
        if let Some(lead) = &self.team_lead {
            let member = self.member.as_ref();
            let _ = write!(
                html,
                "<table><tr><td>1. Nama</td><td>: {}</td><td>3. Nama</td><td>: {}</td></tr>\
                 <tr><td>2. NIP</td><td>: {}</td><td>4. NIP</td><td>: {}</td></tr>\
                 <tr><td>Golongan/Pangkat</td><td>: {}</td><td>Golongan/Pangkat</td><td>: {}</td></tr>\
                 <tr><td>Jabatan</td><td>: {}</td><td>Jabatan</td><td>: {}</td></tr></table>",
                escape_html(&lead.name),
                escape_html(member_field(member, |c| &c.name)),
                escape_html(&lead.service_number),
                escape_html(member_field(member, |c| &c.service_number)),
                escape_html(or_dash(&lead.pay_grade)),
                escape_html(member_field(member, |c| &c.pay_grade)),
                escape_html(&lead.position),
                escape_html(member_field(member, |c| &c.position)),
            );
        }

        let _ = write!(
            html,
            "<table style=\"margin-top:16px\"><tr><td colspan=\"2\">5. Maksud Perjalanan Dinas</td></tr>\
             <tr><td colspan=\"2\" style=\"padding-left:32px\">{}</td></tr>\
             <tr><td>6. Tempat Berangkat</td><td>: {}</td></tr>\
             <tr><td>7. Tempat Tujuan</td><td>: {}</td></tr>\
             <tr><td>8. Tanggal Berangkat</td><td>: {}</td></tr>\
             <tr><td>9. Tanggal Kembali</td><td>: {}</td></tr>\
             <tr><td>10. Lama Perjalanan</td><td>: {} hari</td></tr>\
             <tr><td>11. Jenis Angkutan</td><td>: {}</td></tr>\
             <tr><td>12. Pengikut</td><td>: -</td></tr>\
             <tr><td>13. Alat Angkutan</td><td>: -</td></tr></table>",
            escape_html(&trip.purpose),
            escape_html(&trip.origin),
            escape_html(&trip.destination),
            short_date(trip.departure_date),
            short_date(trip.return_date),
            trip.duration_days,
            escape_html(&trip.transport),
        );
        let _ = write!(
            html,
            "<p>14. Dasar Penugasan:</p><p style=\"padding-left:32px\">{}</p>",
            escape_html(&trip.legal_basis),
        );

        html.push_str("<div class=\"sign\"><div><p>Yang diperintahkan,</p><div class=\"gap\"></div>");
        if let Some(lead) = &self.team_lead {
            let _ = write!(
                html,
                "<p><strong><u>{}</u></strong></p><p>NIP. {}</p>",
                escape_html(&lead.name),
                escape_html(&lead.service_number),
            );
        }
        let _ = write!(
            html,
            "</div><div><p>{}, {}</p><p>Pejabat Penandatangan,</p><div class=\"gap\"></div>",
            escape_html(&office.city),
            long_date(self.signed_on),
        );
        if let Some(signatory) = &self.signatory {
            let _ = write!(
                html,
                "<p><strong><u>{}</u></strong></p><p>NIP. {}</p>",
                escape_html(&signatory.name),
                escape_html(&signatory.service_number),
            );
        }
        let _ = write!(
            html,
            "</div></div><div class=\"center\" style=\"border-top:1px solid #000;margin-top:32px;padding-top:16px\">\
             <p>Nomor: {}</p></div></div>",
            escape_html(&self.order_number),
        );

        page_close(&mut html, "Cetak SPPD");
        html
    }
}

fn member_field<'a>(
    member: Option<&'a PersonnelColumn>,
    field: impl Fn(&'a PersonnelColumn) -> &'a str,
) -> &'a str {
    member.map(field).map(or_dash).unwrap_or("-")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn page_open(html: &mut String, title: &str) {
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"id\"><head><meta charset=\"utf-8\"><title>{}</title>\
         <style>{}</style></head><body><div class=\"page\">",
        escape_html(title),
        PRINT_STYLE,
    );
}

fn page_close(html: &mut String, button: &str) {
    let _ = write!(
        html,
        "</div><div class=\"no-print\"><button onclick=\"window.print()\">{}</button></div></body></html>",
        button,
    );
}
