use actix_web::web;
use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::topic::TopicSummary;
use crate::domain::types::UserId;
use crate::domain::unread::{UnreadFilter, UnreadTopicsPage, UnreadTopicsQuery};
use crate::models::topic::TopicRow;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UnreadTopicReader};

/// Boxed query over topics that are unread for `$uid`.
///
/// A topic is unread when it is not deleted and the user either has no read
/// marker for it or read it before its last post.
macro_rules! unread_topics {
    ($uid:expr, $cids:expr, $filter:expr) => {{
        use crate::schema::{topic_follows, topic_reads, topics};

        let uid: i32 = $uid;
        let cids: &[i32] = $cids;
        let filter: UnreadFilter = $filter;

        let mut query = topics::table
            .left_join(
                topic_reads::table.on(topic_reads::tid
                    .eq(topics::tid)
                    .and(topic_reads::uid.eq(uid))),
            )
            .filter(topics::deleted.eq(false))
            .filter(
                topic_reads::read_at
                    .is_null()
                    .or(topic_reads::read_at.lt(topics::last_post_at)),
            )
            .into_boxed();

        if !cids.is_empty() {
            query = query.filter(topics::cid.eq_any(cids.to_vec()));
        }

        match filter {
            UnreadFilter::All => {}
            UnreadFilter::New => {
                query = query.filter(topic_reads::uid.is_null());
            }
            UnreadFilter::Watched => {
                query = query.filter(
                    topics::tid.eq_any(
                        topic_follows::table
                            .filter(topic_follows::uid.eq(uid))
                            .select(topic_follows::tid),
                    ),
                );
            }
            UnreadFilter::Unreplied => {
                query = query.filter(topics::post_count.le(1));
            }
        }

        query
    }};
}

#[async_trait]
impl UnreadTopicReader for DieselRepository {
    async fn list_unread_topics(
        &self,
        query: UnreadTopicsQuery,
    ) -> RepositoryResult<UnreadTopicsPage> {
        use crate::schema::topics;

        let pool = self.pool.clone();

        web::block(move || -> RepositoryResult<UnreadTopicsPage> {
            let mut conn = pool.get()?;
            let uid = query.uid.get();
            let cids: Vec<i32> = query.cids.iter().map(|cid| cid.get()).collect();

            let topic_count: i64 = unread_topics!(uid, &cids, query.filter)
                .count()
                .get_result(&mut conn)?;

            let limit = query.limit();
            let page_topics = if limit > 0 && query.start < topic_count {
                unread_topics!(uid, &cids, query.filter)
                    .select(TopicRow::as_select())
                    .order((topics::last_post_at.desc(), topics::tid.desc()))
                    .offset(query.start.max(0))
                    .limit(limit)
                    .load(&mut conn)?
                    .into_iter()
                    .map(TopicSummary::try_from)
                    .collect::<Result<Vec<_>, _>>()?
            } else {
                Vec::new()
            };

            Ok(UnreadTopicsPage {
                topic_count,
                topics: page_topics,
            })
        })
        .await?
    }

    async fn count_unread_topics(
        &self,
        uid: UserId,
        filter: UnreadFilter,
    ) -> RepositoryResult<i64> {
        let pool = self.pool.clone();

        web::block(move || -> RepositoryResult<i64> {
            let mut conn = pool.get()?;
            let total = unread_topics!(uid.get(), &[], filter)
                .count()
                .get_result(&mut conn)?;
            Ok(total)
        })
        .await?
    }
}
