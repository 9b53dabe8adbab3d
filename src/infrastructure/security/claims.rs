// src/infrastructure/security/claims.rs
use crate::application::{
    dto::{AuthenticatedUser, Role},
    error::{ApplicationError, ApplicationResult},
};
use biscuit_auth::builder::{Fact, Predicate, Term};

/// Build the request subject from the authority facts of a verified token.
///
/// Expected facts are `user(<id>, <name>)` and `role(<name>)`; anything else
/// is ignored.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let username = ctx
        .username
        .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;

    Ok(AuthenticatedUser { id, username, role })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(&predicate),
            "role" => self.handle_role(&predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &Predicate) {
        if predicate.terms.len() == 2 {
            if let Term::Integer(id) = predicate.terms[0] {
                self.user_id = Some(id);
            }
            if let Term::Str(name) = &predicate.terms[1] {
                self.username = Some(name.clone());
            }
        }
    }

    fn handle_role(&mut self, predicate: &Predicate) {
        if let Some(Term::Str(role_name)) = predicate.terms.first() {
            match role_name.parse() {
                Ok(parsed) => self.role = Some(parsed),
                Err(err) => tracing::debug!(error = %err, "ignoring unknown role fact"),
            }
        }
    }
}
