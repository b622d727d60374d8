//! Role-based authorization table.
//!
//! Every protected operation is listed once with the roles allowed to invoke
//! it; services call `authorize` on entry instead of comparing role strings.

use super::errors::AuthError;
use super::models::{Caller, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ViewOwnRecord,
    UpdateHospital,
    DeleteHospital,
    SetOccupancy,
    AdjustBeds,
    ViewRequests,
    ViewAppointments,
    ViewAvailability,
}

const POLICY: &[(Operation, &[Role])] = &[
    (Operation::ViewOwnRecord, &[Role::Hospital]),
    (Operation::UpdateHospital, &[Role::Hospital]),
    (Operation::DeleteHospital, &[Role::Hospital]),
    (Operation::SetOccupancy, &[Role::Hospital, Role::SubAdmin]),
    (Operation::AdjustBeds, &[Role::Hospital, Role::SubAdmin]),
    (Operation::ViewRequests, &[Role::Hospital, Role::SubAdmin]),
    (Operation::ViewAppointments, &[Role::Hospital]),
    (Operation::ViewAvailability, &[Role::Hospital]),
];

pub fn allowed_roles(operation: Operation) -> &'static [Role] {
    POLICY
        .iter()
        .find(|(op, _)| *op == operation)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

pub fn authorize(caller: &Caller, operation: Operation) -> Result<(), AuthError> {
    if allowed_roles(operation).contains(&caller.role) {
        Ok(())
    } else {
        tracing::debug!(caller = %caller.id, role = %caller.role, ?operation, "authorization denied");
        Err(AuthError::Forbidden {
            role: caller.role,
            operation,
        })
    }
}
