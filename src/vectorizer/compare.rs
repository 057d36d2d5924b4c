use num::Num;

pub trait Compare<N>
where
    N: Num + Copy,
{
    /// dot積
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: impl Iterator<Item = N>, other: impl Iterator<Item = N>) -> f64;
    /// L2ノルム
    /// ||a|| = sqrt(Σ(a_i^2))
    fn norm(vec: impl Iterator<Item = N>) -> f64;
    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// どちらかのノルムが0なら0.0
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64;
}

#[derive(Debug)]
pub struct DefaultCompare;

/// 出現回数ベクタ用
/// 積和は u128 で正確に取り、sqrt と除算だけ f64 で行う
impl Compare<u32> for DefaultCompare {
    #[inline(always)]
    fn dot(vec: impl Iterator<Item = u32>, other: impl Iterator<Item = u32>) -> f64 {
        vec.zip(other)
            .map(|(a, b)| a as u128 * b as u128)
            .sum::<u128>() as f64
    }

    #[inline(always)]
    fn norm(vec: impl Iterator<Item = u32>) -> f64 {
        (vec.map(|a| a as u128 * a as u128).sum::<u128>() as f64).sqrt()
    }

    #[inline(always)]
    fn cosine_similarity(vec: &[u32], other: &[u32]) -> f64 {
        let mut dot = 0_u128;
        let mut norm_a = 0_u128;
        let mut norm_b = 0_u128;
        for (&a, &b) in vec.iter().zip(other.iter()) {
            let (a, b) = (a as u128, b as u128);
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        if norm_a == 0 || norm_b == 0 {
            return 0.0;
        }
        // 同一ベクタでも丸めで 1.0 をわずかに超えることがある
        (dot as f64 / ((norm_a as f64).sqrt() * (norm_b as f64).sqrt())).min(1.0)
    }
}

impl Compare<f64> for DefaultCompare {
    #[inline(always)]
    fn dot(vec: impl Iterator<Item = f64>, other: impl Iterator<Item = f64>) -> f64 {
        vec.zip(other).map(|(a, b)| a * b).sum()
    }

    #[inline(always)]
    fn norm(vec: impl Iterator<Item = f64>) -> f64 {
        vec.map(|a| a * a).sum::<f64>().sqrt()
    }

    #[inline(always)]
    fn cosine_similarity(vec: &[f64], other: &[f64]) -> f64 {
        let mut dot = 0_f64;
        let mut norm_a = 0_f64;
        let mut norm_b = 0_f64;
        for (&a, &b) in vec.iter().zip(other.iter()) {
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
    }
}
