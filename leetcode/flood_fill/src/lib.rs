/// Repaint with `color` the 4-connected region holding `image[sr][sc]`.
///
/// A start outside the image leaves it untouched.
pub fn flood_fill(mut image: Vec<Vec<i32>>, sr: usize, sc: usize, color: i32) -> Vec<Vec<i32>> {
    let Some(&previous) = image.get(sr).and_then(|row| row.get(sc)) else {
        return image;
    };

    // Nothing would change, and the walk below would never see a filled pixel.
    if previous == color {
        return image;
    }

    let mut stack = vec![(sr, sc)];

    while let Some((r, c)) = stack.pop() {
        match image.get_mut(r).and_then(|row| row.get_mut(c)) {
            Some(pixel) if *pixel == previous => *pixel = color,
            _ => continue,
        }

        stack.push((r + 1, c));
        stack.push((r, c + 1));
        if r > 0 { stack.push((r - 1, c)); }
        if c > 0 { stack.push((r, c - 1)); }
    }

    image
}
