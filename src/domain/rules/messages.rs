use crate::domain::entities::alert::{AlertType, Finding};
use crate::domain::value_objects::locale::Locale;

/// Renders findings into user-facing text in one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn render(&self, finding: &Finding) -> String {
        let days = finding.days_since.unwrap_or_default();
        let threshold = finding.threshold.unwrap_or_default();
        match self.locale {
            Locale::En => self.render_en(finding, days, threshold),
            Locale::Ru => self.render_ru(finding, days, threshold),
        }
    }

    fn render_en(&self, finding: &Finding, days: i64, threshold: i64) -> String {
        let day_word = |n: i64| self.locale.pluralize(n, "day", "days", "days");
        match finding.alert_type {
            AlertType::UnansweredReviews => {
                let count = finding.count.unwrap_or_default();
                let noun = self.locale.pluralize(count, "review", "reviews", "reviews");
                format!(
                    "You have {count} unanswered {noun}. Reply to them so customers see you care."
                )
            }
            AlertType::StaleReviews if finding.long_stale => format!(
                "No new reviews for more than {threshold} {}. The listing looks abandoned: \
                 ask customers for feedback and resume collecting reviews.",
                day_word(threshold)
            ),
            AlertType::StaleReviews => format!(
                "No new reviews for {days} {}. Ask satisfied customers to leave a review \
                 at least once a week.",
                day_word(days)
            ),
            AlertType::StaleNews => format!(
                "No news posts for {days} {}. Publish an update at least once a week.",
                day_word(days)
            ),
            AlertType::StalePhotos => format!(
                "No new photos for {days} {}. Add fresh photos at least every {threshold} {}.",
                day_word(days),
                day_word(threshold)
            ),
            AlertType::LowRating => format!(
                "Rating has dropped to {:.1}. Answer negative reviews and address the \
                 complaints behind them.",
                finding.rating.unwrap_or_default()
            ),
        }
    }

    fn render_ru(&self, finding: &Finding, days: i64, threshold: i64) -> String {
        let day_word = |n: i64| self.locale.pluralize(n, "день", "дня", "дней");
        match finding.alert_type {
            AlertType::UnansweredReviews => {
                let count = finding.count.unwrap_or_default();
                let noun = self.locale.pluralize(
                    count,
                    "неотвеченный отзыв",
                    "неотвеченных отзыва",
                    "неотвеченных отзывов",
                );
                format!(
                    "У вас {count} {noun}. Ответьте на них, чтобы клиенты видели вашу заботу."
                )
            }
            AlertType::StaleReviews if finding.long_stale => format!(
                "Новых отзывов нет больше {threshold} {}. Карточка выглядит заброшенной: \
                 попросите клиентов оставить отзыв.",
                day_word(threshold)
            ),
            AlertType::StaleReviews => format!(
                "Новых отзывов нет уже {days} {}. Просите довольных клиентов оставлять \
                 отзывы хотя бы раз в неделю.",
                day_word(days)
            ),
            AlertType::StaleNews => format!(
                "Новостей не было {days} {}. Публикуйте новости хотя бы раз в неделю.",
                day_word(days)
            ),
            AlertType::StalePhotos => format!(
                "Новых фотографий не было {days} {}. Добавляйте фото не реже чем раз в \
                 {threshold} {}.",
                day_word(days),
                day_word(threshold)
            ),
            AlertType::LowRating => format!(
                "Рейтинг опустился до {:.1}. Отвечайте на негативные отзывы и устраняйте \
                 причины жалоб.",
                finding.rating.unwrap_or_default()
            ),
        }
    }
}
