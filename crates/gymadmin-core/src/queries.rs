//! Read-only views for the console screens

use serde::Serialize;

use crate::model::{EntityId, Instructor, Member, Reservation};
use crate::ops::GymStore;
use crate::storage::KvStorage;

pub const UNKNOWN_MEMBER_LABEL: &str = "Socio Desconocido";
pub const UNKNOWN_CLASS_LABEL: &str = "Clase Desconocida";

/// Collection sizes shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub members: usize,
    pub instructors: usize,
    pub classes: usize,
    pub reservations: usize,
}

pub fn dashboard_counts<S: KvStorage>(store: &GymStore<S>) -> DashboardCounts {
    DashboardCounts {
        members: store.members().len(),
        instructors: store.instructors().len(),
        classes: store.classes().len(),
        reservations: store.reservations().len(),
    }
}

/// Members whose first or last name (any case) or national id contains `term`
///
/// An empty term matches everyone.
pub fn search_members<'a, S: KvStorage>(store: &'a GymStore<S>, term: &str) -> Vec<&'a Member> {
    store
        .members()
        .iter()
        .filter(|m| m.details.matches_name_or_id(term))
        .collect()
}

/// Instructors whose first or last name (any case) contains `term`
///
/// National ids are not searched here.
pub fn search_instructors<'a, S: KvStorage>(
    store: &'a GymStore<S>,
    term: &str,
) -> Vec<&'a Instructor> {
    store
        .instructors()
        .iter()
        .filter(|i| i.details.matches_name(term))
        .collect()
}

/// A reservation with its references resolved to display labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationView {
    pub id: EntityId,
    pub member: String,
    pub class: String,
    pub date: String,
}

impl ReservationView {
    fn resolve<S: KvStorage>(store: &GymStore<S>, reservation: &Reservation) -> Self {
        let member = store
            .member(reservation.member_id())
            .map_or_else(|| UNKNOWN_MEMBER_LABEL.to_string(), Member::full_name);
        let class = store
            .class(reservation.class_id())
            .map_or_else(|| UNKNOWN_CLASS_LABEL.to_string(), |c| c.label());
        Self {
            id: reservation.id,
            member,
            class,
            date: reservation.details.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Every reservation in insertion order, with labels
pub fn reservation_views<S: KvStorage>(store: &GymStore<S>) -> Vec<ReservationView> {
    store
        .reservations()
        .iter()
        .map(|r| ReservationView::resolve(store, r))
        .collect()
}
