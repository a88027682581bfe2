//! Card renderers for doctors, statuses and hospitals.
//!
//! The `*_cards` functions are pure; the `render_*` functions replace a
//! container's contents through the [`Surface`]. Re-rendering replaces every
//! card, so a previous doctor selection does not survive it.

use crate::dataset::{APPOINTMENTS, HOSPITALS, TEST_ORDERS};
use crate::error::ClinicResult;
use crate::models::{status_class, Doctor, Hospital};
use crate::view::{Card, Surface};

/// Which lookup collection a status list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSource {
    Appointments,
    TestOrders,
}

/// Escape text for HTML content and double-quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One `doctor-card` per doctor.
///
/// Selectable cards end with a "Select Doctor" button carrying the doctor's
/// id and name; the others link to `detail_page?id=<id>`.
pub fn doctor_cards(doctors: &[&Doctor], selectable: bool, detail_page: &str) -> Vec<Card> {
    doctors
        .iter()
        .map(|doctor| {
            let name = escape_html(doctor.name);
            let action = if selectable {
                format!(
                    "<button class=\"select-btn\" data-doctor-id=\"{}\" data-doctor-name=\"{}\">Select Doctor</button>",
                    doctor.id, name
                )
            } else {
                format!(
                    "<a href=\"{}?id={}\" class=\"select-btn\" style=\"background-color: #007bff;\">View Details</a>",
                    escape_html(detail_page),
                    doctor.id
                )
            };

            Card {
                key: doctor.id.to_string(),
                class: "doctor-card",
                markup: format!(
                    "<h3>{}</h3><span class=\"specialization\">{}</span><p>Experience: {} years | Rating: {} ⭐</p><p>Location: {}</p>{}",
                    name,
                    escape_html(doctor.specialization),
                    doctor.experience,
                    doctor.rating,
                    escape_html(doctor.location),
                    action
                ),
            }
        })
        .collect()
}

/// One `status-card` per appointment or test order.
pub fn status_cards(source: StatusSource) -> Vec<Card> {
    match source {
        StatusSource::Appointments => APPOINTMENTS
            .iter()
            .map(|a| {
                status_card(
                    a.id,
                    a.doctor,
                    &format!("{} at {}", a.date, a.time),
                    a.status.as_str(),
                )
            })
            .collect(),
        StatusSource::TestOrders => TEST_ORDERS
            .iter()
            .map(|t| status_card(t.reference, t.test, t.date, t.status.as_str()))
            .collect(),
    }
}

fn status_card(reference: &str, heading: &str, when: &str, status: &str) -> Card {
    Card {
        key: reference.to_string(),
        class: "status-card",
        markup: format!(
            "<h3>{}</h3><p>Ref ID: <strong>{}</strong></p><p>Date: {}</p><p>Status: <span class=\"status-tag {}\">{}</span></p>",
            escape_html(heading),
            escape_html(reference),
            escape_html(when),
            status_class(status),
            status
        ),
    }
}

/// One `network-card` per hospital. "Get Directions" is a placeholder link.
pub fn hospital_cards(hospitals: &[Hospital]) -> Vec<Card> {
    hospitals
        .iter()
        .map(|h| Card {
            key: h.id.to_string(),
            class: "network-card",
            markup: format!(
                "<div><h3>{}</h3><p>Address: {}</p><p class=\"contact\">Phone: {} | Rating: {} ⭐</p></div><a href=\"#\" class=\"select-btn\">Get Directions</a>",
                escape_html(h.name),
                escape_html(h.address),
                escape_html(h.phone),
                h.rating
            ),
        })
        .collect()
}

/// Render doctors into `container`.
pub fn render_doctors<S: Surface>(
    surface: &mut S,
    container: &str,
    doctors: &[&Doctor],
    selectable: bool,
    detail_page: &str,
) -> ClinicResult<usize> {
    let cards = doctor_cards(doctors, selectable, detail_page);
    surface.replace_cards(container, &cards)?;
    log::debug!("rendered {} doctor cards into #{}", cards.len(), container);
    Ok(cards.len())
}

/// Render appointments or test orders into `container`.
pub fn render_statuses<S: Surface>(
    surface: &mut S,
    container: &str,
    source: StatusSource,
) -> ClinicResult<usize> {
    let cards = status_cards(source);
    surface.replace_cards(container, &cards)?;
    log::debug!("rendered {} {:?} status cards into #{}", cards.len(), source, container);
    Ok(cards.len())
}

/// Render the hospital network into `container`.
pub fn render_hospitals<S: Surface>(surface: &mut S, container: &str) -> ClinicResult<usize> {
    let cards = hospital_cards(HOSPITALS);
    surface.replace_cards(container, &cards)?;
    log::debug!("rendered {} hospital cards into #{}", cards.len(), container);
    Ok(cards.len())
}
