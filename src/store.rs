use std::collections::HashMap;

use crate::client::Client;
use crate::errors::{OriginationError, Result};
use crate::statement::Statement;
use crate::types::{ClientId, Credit, CreditId, StatementId};

/// persistence seam for the origination workflow
///
/// Entities are owned value records referenced by id; every cross-entity
/// lookup goes through this interface. An unknown id is a distinct
/// not-found error, never conflated with a denied/blocked statement.
pub trait ApplicationStore {
    fn save_client(&mut self, client: Client);
    fn client(&self, id: ClientId) -> Result<Client>;

    fn save_statement(&mut self, statement: Statement);
    fn statement(&self, id: StatementId) -> Result<Statement>;
    fn statements(&self) -> Vec<Statement>;

    fn save_credit(&mut self, credit: Credit);
    fn credit(&self, id: CreditId) -> Result<Credit>;
}

/// in-memory store for tests and local wiring
#[derive(Debug, Default)]
pub struct InMemoryStore {
    clients: HashMap<ClientId, Client>,
    statements: HashMap<StatementId, Statement>,
    credits: HashMap<CreditId, Credit>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApplicationStore for InMemoryStore {
    fn save_client(&mut self, client: Client) {
        self.clients.insert(client.client_id, client);
    }

    fn client(&self, id: ClientId) -> Result<Client> {
        self.clients
            .get(&id)
            .cloned()
            .ok_or(OriginationError::ClientNotFound { id })
    }

    fn save_statement(&mut self, statement: Statement) {
        self.statements.insert(statement.statement_id, statement);
    }

    fn statement(&self, id: StatementId) -> Result<Statement> {
        self.statements
            .get(&id)
            .cloned()
            .ok_or(OriginationError::StatementNotFound { id })
    }

    fn statements(&self) -> Vec<Statement> {
        let mut all: Vec<Statement> = self.statements.values().cloned().collect();
        all.sort_by_key(|s| s.creation_date);
        all
    }

    fn save_credit(&mut self, credit: Credit) {
        self.credits.insert(credit.credit_id, credit);
    }

    fn credit(&self, id: CreditId) -> Result<Credit> {
        self.credits
            .get(&id)
            .cloned()
            .ok_or(OriginationError::CreditNotFound { id })
    }
}
