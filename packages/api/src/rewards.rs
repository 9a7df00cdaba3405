use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Reward;

impl ApiClient {
    pub async fn list_rewards(&self) -> Result<Vec<Reward>> {
        self.get("/rewards", "consultar recompensas").await
    }

    pub async fn get_reward(&self, id: &str) -> Result<Reward> {
        self.get(&format!("/rewards/{id}"), "consultar recompensa").await
    }
}
