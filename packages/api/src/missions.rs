use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Mission;

impl ApiClient {
    pub async fn list_missions(&self) -> Result<Vec<Mission>> {
        self.get("/missions", "consultar missões").await
    }

    pub async fn get_mission(&self, id: &str) -> Result<Mission> {
        self.get(&format!("/missions/{id}"), "consultar missão").await
    }
}
