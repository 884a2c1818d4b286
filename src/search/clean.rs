/// Drop interior waypoints that the surrounding path can see past.
///
/// Greedy single pass: an interior node is kept only when the last kept node
/// has no line of sight to the node two positions ahead of it in the original
/// path. Start and end nodes always survive, and paths of two or fewer nodes
/// (including empty and single-node paths) come back unchanged.
///
/// Applied to its own output the pass is a no-op, provided the visibility
/// predicate is deterministic.
pub fn clean_path<T, V>(path: &[T], has_line_of_sight: V) -> Vec<T>
where
    T: Clone,
    V: Fn(&T, &T) -> bool,
{
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut cleaned = vec![path[0].clone()];
    let mut last_kept = 0;

    for i in 1..path.len() - 1 {
        if !has_line_of_sight(&path[last_kept], &path[i + 1]) {
            cleaned.push(path[i].clone());
            last_kept = i;
        }
    }

    cleaned.push(path[path.len() - 1].clone());
    cleaned
}
