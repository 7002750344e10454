//! Advisory generation on top of the aggregation pipeline

use uuid::Uuid;

use shared::AdvisoryResponse;

use crate::error::AppResult;
use crate::external::{AdvisorClient, SatelliteProvider, WeatherProvider};
use crate::services::aggregation::{FarmerDataOptions, FarmerDataService, SelectionContext};
use crate::services::profile::ProfileStore;

/// Answers farmer questions by aggregating the farmer's context and
/// handing it to the recommendation generator
#[derive(Clone)]
pub struct AdvisoryService<S, W, P> {
    farmer_data: FarmerDataService<S, W, P>,
    advisor: AdvisorClient,
}

impl<S, W, P> AdvisoryService<S, W, P>
where
    S: ProfileStore,
    W: WeatherProvider,
    P: SatelliteProvider,
{
    pub fn new(farmer_data: FarmerDataService<S, W, P>, advisor: AdvisorClient) -> Self {
        Self {
            farmer_data,
            advisor,
        }
    }

    pub fn farmer_data(&self) -> &FarmerDataService<S, W, P> {
        &self.farmer_data
    }

    /// Aggregate the farmer's context and generate advice for one question.
    ///
    /// The generator receives the context partial or complete; it degrades
    /// its answer from the completeness map rather than failing.
    pub async fn ask(
        &self,
        user_id: Uuid,
        question: &str,
        selection: SelectionContext,
    ) -> AppResult<AdvisoryResponse> {
        let context = self
            .farmer_data
            .get_farmer_data(user_id, FarmerDataOptions::default(), selection)
            .await?;

        self.advisor.generate(&context, question).await
    }
}
