//! Quaternion helpers on raw `[f32; 4]` (x, y, z, w):
//! - composition (mul_quat) and true inverse
//! - angle_axis_y for the zero-angle shift (degrees about the up axis)
//! - slerp_quat (shortest-arc spherical interpolation, exact at endpoints)

/// Quaternion as (x, y, z, w).
pub type Quat = [f32; 4];

/// Identity rotation.
pub const IDENTITY: Quat = [0.0, 0.0, 0.0, 1.0];

#[inline]
pub fn dot4(a: Quat, b: Quat) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn normalize4(mut q: Quat) -> Quat {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Hamilton product: `mul_quat(a, b)` is the rotation b followed by a.
#[inline]
pub fn mul_quat(a: Quat, b: Quat) -> Quat {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

/// True inverse (conjugate over squared length). For unit quaternions this
/// is the conjugate; for the non-unit masked twist it is still the exact
/// inverse, so `mul_quat(q, inverse_quat(q))` stays the identity.
#[inline]
pub fn inverse_quat(q: Quat) -> Quat {
    let len2 = dot4(q, q);
    if len2 <= 0.0 {
        return IDENTITY;
    }
    let inv = len2.recip();
    [-q[0] * inv, -q[1] * inv, -q[2] * inv, q[3] * inv]
}

/// Rotation by `degrees` about the up (+Y) axis.
#[inline]
pub fn angle_axis_y(degrees: f32) -> Quat {
    let half = degrees.to_radians() * 0.5;
    let (s, c) = half.sin_cos();
    [0.0, s, 0.0, c]
}

/// Shortest-arc spherical interpolation.
///
/// Endpoints are returned exactly (`t <= 0` yields `a`, `t >= 1` yields
/// `b`), which blending relies on for the weight-0 and weight-±1 cases.
/// Inputs are not required to be unit-norm; the arc angle is measured on
/// the normalized directions and magnitudes follow the sine weights.
pub fn slerp_quat(a: Quat, mut b: Quat, t: f32) -> Quat {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    let mut d = dot4(a, b);
    if d < 0.0 {
        b = [-b[0], -b[1], -b[2], -b[3]];
        d = -d;
    }
    let norm = (dot4(a, a) * dot4(b, b)).sqrt();
    if norm <= 0.0 {
        return a;
    }
    let cos_theta = (d / norm).min(1.0);
    let theta = cos_theta.acos();
    let sin_theta = theta.sin();
    if sin_theta < 1e-6 {
        // Degenerate arc: fall back to component-wise lerp.
        return [
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ];
    }
    let wa = ((1.0 - t) * theta).sin() / sin_theta;
    let wb = (t * theta).sin() / sin_theta;
    [
        a[0] * wa + b[0] * wb,
        a[1] * wa + b[1] * wb,
        a[2] * wa + b[2] * wb,
        a[3] * wa + b[3] * wb,
    ]
}
