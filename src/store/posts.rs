use chrono::Utc;
use im::Vector;

use crate::environment::model::{Post, PostId, PostsAction};

/// Reducer of the posts slice: the only owner of the list of posts.
pub fn reduce(posts: &Vector<Post>, action: &PostsAction) -> Vector<Post> {
    match action {
        PostsAction::Create(record) => {
            let mut next = posts.clone();
            next.push_back(Post::from_record(next_id(posts), record.clone(), Utc::now()));
            next
        }
        PostsAction::Update(id, record) => {
            let Some(index) = posts.iter().position(|post| post.id == *id) else {
                log::warn!("update for unknown post {id}");
                return posts.clone();
            };
            let mut next = posts.clone();
            let created_at = next[index].created_at;
            next[index] = Post::from_record(*id, record.clone(), created_at);
            next
        }
    }
}

// Ids start at 1; zero is the surrounding system's "no post" sentinel.
fn next_id(posts: &Vector<Post>) -> PostId {
    PostId(posts.iter().map(|post| post.id.0).max().unwrap_or(0) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::model::PostRecord;

    fn record(title: &str) -> PostRecord {
        PostRecord {
            creator: "ada".to_string(),
            title: title.to_string(),
            message: "a message with at least five words".to_string(),
            tags: vec!["x".to_string()],
            image: None,
        }
    }

    #[test]
    fn create_assigns_increasing_ids_starting_at_one() {
        let posts = reduce(&Vector::new(), &PostsAction::Create(record("first")));
        let posts = reduce(&posts, &PostsAction::Create(record("second")));
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, PostId(1));
        assert_eq!(posts[1].id, PostId(2));
        assert!(posts.iter().all(|post| post.id != PostId::NONE));
    }

    #[test]
    fn update_replaces_the_record_but_keeps_id_and_created_at() {
        let posts = reduce(&Vector::new(), &PostsAction::Create(record("before")));
        let created_at = posts[0].created_at;

        let posts = reduce(&posts, &PostsAction::Update(PostId(1), record("after")));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, PostId(1));
        assert_eq!(posts[0].title, "after");
        assert_eq!(posts[0].created_at, created_at);
    }

    #[test]
    fn update_for_an_unknown_id_changes_nothing() {
        let posts = reduce(&Vector::new(), &PostsAction::Create(record("kept")));
        let updated = reduce(&posts, &PostsAction::Update(PostId(99), record("lost")));
        assert_eq!(updated, posts);
    }
}
