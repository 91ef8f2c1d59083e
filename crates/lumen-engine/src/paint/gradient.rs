/// Direction in which a two-color gradient runs.
///
/// The sector variants interpolate top → bottom → top across the region,
/// producing a band that peaks in the middle.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientDirection {
    #[default]
    Vertical,
    Horizontal,
    VerticalSector,
    HorizontalSector,
}

