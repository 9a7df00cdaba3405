use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Team;

impl ApiClient {
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.get("/teams", "consultar equipes").await
    }
}
