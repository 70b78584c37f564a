use crate::domain::entities::sheet::ContentLine;

/// Rebuilds `N.0` / `N.M` / `N.M.K` deliverable strings from flat content rows.
///
/// Rows are consumed in arrival order. A topic opens a new top-level number
/// only when it differs from the topic currently open, and an empty topic
/// continues the open one. Every bullet row emits, except a sub-bullet row
/// that repeats the open bullet as its parent cell. Empty bullets and
/// sub-bullets emit nothing and leave the counters alone.
pub fn number_content_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentLine>,
{
    let mut rendered = Vec::new();
    let mut open_topic: Option<&str> = None;
    let mut open_bullet: Option<&str> = None;
    let (mut topic_no, mut bullet_no, mut sub_no) = (0_u32, 0_u32, 0_u32);

    for line in lines {
        let topic = line.topic.trim();
        if !topic.is_empty() && open_topic != Some(topic) {
            topic_no += 1;
            bullet_no = 0;
            sub_no = 0;
            open_topic = Some(topic);
            open_bullet = None;
            rendered.push(format!("{topic_no}.0 {topic}"));
        }
        if open_topic.is_none() {
            continue;
        }

        let bullet = line.bullet.trim();
        let sub_bullet = line.sub_bullet.trim();
        let repeats_parent = !sub_bullet.is_empty() && open_bullet == Some(bullet);
        if !bullet.is_empty() && !repeats_parent {
            bullet_no += 1;
            sub_no = 0;
            open_bullet = Some(bullet);
            rendered.push(format!("{topic_no}.{bullet_no} {bullet}"));
        }

        if !sub_bullet.is_empty() && open_bullet.is_some() {
            sub_no += 1;
            rendered.push(format!("{topic_no}.{bullet_no}.{sub_no} {sub_bullet}"));
        }
    }

    rendered
}
