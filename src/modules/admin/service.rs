use tracing::{info, instrument};
use uuid::Uuid;

use mindmeter_core::pagination::{PageParams, Paginated};
use mindmeter_core::Result;

use crate::client::ApiClient;

use super::model::{AdminUser, PlatformStatistics, SetActiveRequest, UserFilter};

pub struct AdminService;

impl AdminService {
    /// Paged user list with optional search and role filters.
    #[instrument(skip(client))]
    pub async fn list_users(
        client: &ApiClient,
        params: PageParams,
        filter: &UserFilter,
    ) -> Result<Paginated<AdminUser>> {
        let mut query = params.to_query();
        if let Some(search) = &filter.search {
            query.push(("search", search.clone()));
        }
        if let Some(role) = &filter.role {
            query.push(("role", role.clone()));
        }
        client.get_json_with_query("/api/admin/users", &query).await
    }

    /// Activates or deactivates an account.
    #[instrument(skip(client))]
    pub async fn set_active(client: &ApiClient, user_id: Uuid, active: bool) -> Result<AdminUser> {
        let user: AdminUser = client
            .put_json(
                &format!("/api/admin/users/{user_id}/active"),
                &SetActiveRequest { active },
            )
            .await?;
        info!(user_id = %user_id, active, "Updated account state");
        Ok(user)
    }

    #[instrument(skip(client))]
    pub async fn statistics(client: &ApiClient) -> Result<PlatformStatistics> {
        client.get_json("/api/admin/statistics").await
    }
}
