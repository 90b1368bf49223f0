use super::errors::FoodError;
use super::value_objects::FeedbackKind;
use crate::domain::shared::value_objects::{FoodId, UserId};

/// Ground truth reported by the user for a consumed or spoiled item.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryFeedback {
    pub food_id: FoodId,
    pub user_id: UserId,
    pub kind: FeedbackKind,
    /// Days the item actually lasted.
    pub actual_days: f64,
}

impl ExpiryFeedback {
    pub fn new(
        food_id: FoodId,
        user_id: UserId,
        kind: FeedbackKind,
        actual_days: f64,
    ) -> Result<Self, FoodError> {
        if user_id.is_empty() {
            return Err(FoodError::UserRequired);
        }
        if !actual_days.is_finite() || actual_days <= 0.0 {
            return Err(FoodError::ActualDaysNotPositive);
        }
        Ok(Self {
            food_id,
            user_id,
            kind,
            actual_days,
        })
    }
}

/// Backend acknowledgement of a feedback submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackReceipt {
    pub item_name: String,
    pub category: String,
    pub min_required_feedback: u32,
    pub item_feedback_count: u32,
    pub feedback_needed: u32,
    pub personalization_activated_now: bool,
    pub message: Option<String>,
}

impl FeedbackReceipt {
    pub fn personalization_active(&self) -> bool {
        self.item_feedback_count >= self.min_required_feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_positive_actual_days() {
        let feedback =
            ExpiryFeedback::new(FoodId::new("f1"), UserId::new("U001"), FeedbackKind::Early, 3.5);
        assert!(feedback.is_ok());
    }

    #[test]
    fn should_reject_non_positive_actual_days() {
        for days in [0.0, -1.0, f64::NAN] {
            let result =
                ExpiryFeedback::new(FoodId::new("f1"), UserId::new("U001"), FeedbackKind::Late, days);
            assert!(matches!(result, Err(FoodError::ActualDaysNotPositive)));
        }
    }

    #[test]
    fn should_report_active_personalization_once_threshold_reached() {
        let receipt = FeedbackReceipt {
            item_name: "eggs".to_string(),
            category: "dairy".to_string(),
            min_required_feedback: 5,
            item_feedback_count: 5,
            feedback_needed: 0,
            personalization_activated_now: true,
            message: None,
        };
        assert!(receipt.personalization_active());
    }
}
