use std::ops::{Index, IndexMut};

use hybrid_array::Array;
use hybrid_array::sizes::{U16, U64};

use super::util::{self, concatu64};
use crate::{
    C0, C1,
    low::{AesBlock2, IAesBlock, IAesBlock2},
};

/// Eight lanes, each carrying the AEGIS-128L state row of both instances.
#[derive(Clone, Copy)]
pub struct State128X2<B: IAesBlock2 = AesBlock2>([B; 8]);

impl<B: IAesBlock2> Index<usize> for State128X2<B> {
    type Output = B;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<B: IAesBlock2> IndexMut<usize> for State128X2<B> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<B: IAesBlock2> State128X2<B> {
    #[inline(always)]
    pub fn new(key: &Array<u8, U16>, nonce: &Array<u8, U16>) -> Self {
        let key = B::Half::from_block(key);
        let nonce = B::Half::from_block(nonce);
        let c0 = B::Half::from_block(&C0);
        let c1 = B::Half::from_block(&C1);

        // for i in 0..D:
        //     V[0,i] = key ^ nonce
        //     V[1,i] = C1
        //     V[2,i] = C0
        //     V[3,i] = C1
        //     V[4,i] = key ^ nonce
        //     V[5,i] = key ^ C0
        //     V[6,i] = key ^ C1
        //     V[7,i] = key ^ C0
        let kn = B::from(key ^ nonce);
        let k0 = B::from(key ^ c0);
        let k1 = B::from(key ^ c1);
        let mut v = Self([kn, B::from(c1), B::from(c0), B::from(c1), kn, k0, k1, k0]);

        // for i in 0..D:
        //     ctx[i] = ZeroPad(Byte(i) || Byte(D - 1), 128)
        let ctx = ctx::<B>();

        let key = B::from(key);
        let nonce = B::from(nonce);

        // Repeat(10,
        //     for i in 0..D:
        //         V[3,i] = V[3,i] ^ ctx[i]
        //         V[7,i] = V[7,i] ^ ctx[i]

        //     Update(nonce_v, key_v)
        // )
        for _ in 0..10 {
            v[3] ^= ctx;
            v[7] ^= ctx;
            v.update(nonce, key);
        }

        v
    }

    #[inline(always)]
    fn keystream(&self) -> (B, B) {
        let v = self;
        // z0 = {}
        // z1 = {}
        // for i in 0..D:
        //     z0 = z0 || (V[6,i] ^ V[1,i] ^ (V[2,i] & V[3,i]))
        //     z1 = z1 || (V[2,i] ^ V[5,i] ^ (V[6,i] & V[7,i]))
        let z0 = v[6] ^ v[1] ^ (v[2] & v[3]);
        let z1 = v[2] ^ v[5] ^ (v[6] & v[7]);
        (z0, z1)
    }

    #[inline(always)]
    pub fn encrypt_block(&mut self, block: &mut Array<u8, U64>) {
        let (z0, z1) = self.keystream();

        // t0, t1 = Split(xi, R)
        let (t0, t1) = util::split_blocks::<B>(block);

        // out0 = t0 ^ z0
        // out1 = t1 ^ z1
        let out0 = t0 ^ z0;
        let out1 = t1 ^ z1;

        // Update(t0, t1)
        self.update(t0, t1);

        // ci = out0 || out1
        util::write_blocks(out0, out1, block);
    }

    #[inline(always)]
    pub fn decrypt_block(&mut self, block: &mut Array<u8, U64>) {
        let (z0, z1) = self.keystream();

        // t0, t1 = Split(ci, R)
        let (t0, t1) = util::split_blocks::<B>(block);

        // out0 = t0 ^ z0
        // out1 = t1 ^ z1
        let out0 = t0 ^ z0;
        let out1 = t1 ^ z1;

        // Update(out0, out1)
        self.update(out0, out1);

        // xi = out0 || out1
        util::write_blocks(out0, out1, block);
    }

    /// Decrypts the first `len` bytes of `padded_block`. Everything past `len`
    /// is zero on return, and only those zeroed bytes are absorbed.
    pub fn decrypt_partial_block(&mut self, padded_block: &mut Array<u8, U64>, len: usize) {
        assert!(0 < len && len < 64, "cn out of range");

        let (z0, z1) = self.keystream();

        // t0, t1 = Split(ZeroPad(cn, R), 128 * D)
        let (t0, t1) = util::split_blocks::<B>(padded_block);

        // out0 = t0 ^ z0
        // out1 = t1 ^ z1
        let out0 = t0 ^ z0;
        let out1 = t1 ^ z1;

        // xn = Truncate(out0 || out1, |cn|)
        util::write_blocks(out0, out1, padded_block);
        padded_block[len..].fill(0);

        // v0, v1 = Split(ZeroPad(xn, R), 128 * D)
        // Update(v0, v1)
        let (v0, v1) = util::split_blocks::<B>(padded_block);
        self.update(v0, v1);
    }

    #[inline(always)]
    pub fn absorb(&mut self, ad: &Array<u8, U64>) {
        // t0, t1 = Split(ai, R)
        // Update(t0, t1)
        let (t0, t1) = util::split_blocks::<B>(ad);
        self.update(t0, t1);
    }

    /// `Update(t, t)` seven times with `t = V[2] ^ (u, u)` taken before the first round.
    #[inline(always)]
    fn finalize_rounds(&mut self, x: u64, y: u64) {
        let u: B::Half = concatu64(x, y);
        let t = self[2] ^ B::from(u);
        for _ in 0..7 {
            self.update(t, t);
        }
    }

    pub fn finalize16(mut self, ad_len_bits: u64, msg_len_bits: u64) -> [u8; 16] {
        // u = LE64(ad_len_bits) || LE64(msg_len_bits)
        // for i in 0..D:
        //     t = t || (V[2,i] ^ u)
        // Repeat(7, Update(t, t))
        self.finalize_rounds(ad_len_bits, msg_len_bits);

        // tag = ZeroPad({}, 128)
        // for i in 0..D:
        //     ti = V[0,i] ^ V[1,i] ^ V[2,i] ^ V[3,i] ^ V[4,i] ^ V[5,i] ^ V[6,i]
        //     tag = tag ^ ti
        let tag: Array<u8, U16> = self.fold_tag16().reduce_xor().into();
        tag.0
    }

    pub fn finalize32(mut self, ad_len_bits: u64, msg_len_bits: u64) -> [u8; 32] {
        self.finalize_rounds(ad_len_bits, msg_len_bits);

        // ti0 = ZeroPad({}, 128)
        // ti1 = ZeroPad({}, 128)
        // for i in 0..D:
        //     ti0 = ti0 ^ V[0,i] ^ V[1,i] ^ V[2,i] ^ V[3,i]
        //     ti1 = ti1 ^ V[4,i] ^ V[5,i] ^ V[6,i] ^ V[7,i]
        // tag = ti0 || ti1
        let [ti0, ti1] = self.fold_tag32();
        util::join_halves(ti0.reduce_xor(), ti1.reduce_xor())
    }

    pub fn finalize_mac16(mut self, data_len_bits: u64) -> [u8; 16] {
        // u = LE64(data_len_bits) || LE64(tag_len_bits)
        self.finalize_rounds(data_len_bits, 128);

        // for i in 0..D: # tag from state 0 is included
        //     ti = V[0,i] ^ V[1,i] ^ V[2,i] ^ V[3,i] ^ V[4,i] ^ V[5,i] ^ V[6,i]
        //     tags = tags || ti
        let [t0, t1] = self.fold_tag16().halves();

        // # Absorb tags into state 0; other states are not used anymore
        // for v in Split(tags, 256):
        //     x0, x1 = Split(v, 128)
        //     Absorb(ZeroPad(x0, R / 2) || ZeroPad(x1, R / 2))
        self.absorb_into_first(t0, t1);

        // u = LE64(D) || LE64(tag_len_bits)
        // t = ZeroPad(V[2,0] ^ u, R)
        // Repeat(7, Update(t, t))
        self.finalize_first_rounds(128);

        // tag = V[0,0] ^ V[1,0] ^ V[2,0] ^ V[3,0] ^ V[4,0] ^ V[5,0] ^ V[6,0]
        let tag: Array<u8, U16> = self.fold_tag16().first().into();
        tag.0
    }

    pub fn finalize_mac32(mut self, data_len_bits: u64) -> [u8; 32] {
        self.finalize_rounds(data_len_bits, 256);

        // for i in 1..D: # tag from state 0 is skipped
        //     ti0 = V[0,i] ^ V[1,i] ^ V[2,i] ^ V[3,i]
        //     ti1 = V[4,i] ^ V[5,i] ^ V[6,i] ^ V[7,i]
        //     tags = tags || (ti0 || ti1)
        let [ti0, ti1] = self.fold_tag32();
        let [_, ti0] = ti0.halves();
        let [_, ti1] = ti1.halves();

        self.absorb_into_first(ti0, ti1);
        self.finalize_first_rounds(256);

        // t0 = V[0,0] ^ V[1,0] ^ V[2,0] ^ V[3,0]
        // t1 = V[4,0] ^ V[5,0] ^ V[6,0] ^ V[7,0]
        // tag = t0 || t1
        let [t0, t1] = self.fold_tag32();
        util::join_halves(t0.first(), t1.first())
    }

    /// One update carrying `x0`, `x1` in instance 0 and zeros in instance 1.
    #[inline(always)]
    fn absorb_into_first(&mut self, x0: B::Half, x1: B::Half) {
        let zero = B::Half::default();
        self.update(B::from_halves([x0, zero]), B::from_halves([x1, zero]));
    }

    #[inline(always)]
    fn finalize_first_rounds(&mut self, tag_len_bits: u64) {
        let zero = B::Half::default();
        let u: B::Half = concatu64(2, tag_len_bits);
        let t = B::from_halves([self[2].first() ^ u, zero]);
        for _ in 0..7 {
            self.update(t, t);
        }
    }

    #[inline(always)]
    pub(super) fn update(&mut self, m0: B, m1: B) {
        let v = self;

        // for i in 0..D:
        //     V'[0,i] = AESRound(V[7,i], V[0,i] ^ m0[i])
        //     V'[1,i] = AESRound(V[0,i], V[1,i])
        //     V'[2,i] = AESRound(V[1,i], V[2,i])
        //     V'[3,i] = AESRound(V[2,i], V[3,i])
        //     V'[4,i] = AESRound(V[3,i], V[4,i] ^ m1[i])
        //     V'[5,i] = AESRound(V[4,i], V[5,i])
        //     V'[6,i] = AESRound(V[5,i], V[6,i])
        //     V'[7,i] = AESRound(V[6,i], V[7,i])
        let tmp = v[7];
        v[7] = v[6].aes(v[7]);
        v[6] = v[5].aes(v[6]);
        v[5] = v[4].aes(v[5]);
        v[4] = v[3].aes(v[4] ^ m1);
        v[3] = v[2].aes(v[3]);
        v[2] = v[1].aes(v[2]);
        v[1] = v[0].aes(v[1]);
        v[0] = tmp.aes(v[0] ^ m0);
    }

    #[inline(always)]
    fn fold_tag16(&self) -> B {
        self[0] ^ self[1] ^ self[2] ^ self[3] ^ self[4] ^ self[5] ^ self[6]
    }

    #[inline(always)]
    fn fold_tag32(&self) -> [B; 2] {
        [
            self[0] ^ self[1] ^ self[2] ^ self[3],
            self[4] ^ self[5] ^ self[6] ^ self[7],
        ]
    }
}

/// Instance `i` of 2 gets `ZeroPad(Byte(i) || Byte(1), 128)`.
#[inline(always)]
fn ctx<B: IAesBlock2>() -> B {
    let mut a: Array<u8, U16> = Array([0; 16]);
    a[1] = 1;
    let ctx0 = B::Half::from_block(&a);
    a[0] = 1;
    let ctx1 = B::Half::from_block(&a);
    B::from_halves([ctx0, ctx1])
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use hybrid_array::Array;
    use hybrid_array::sizes::U16;

    use super::State128X2;
    use crate::low::{AesBlock2, IAesBlock, IAesBlock2, soft};

    fn lanes<B: IAesBlock2>(s: &State128X2<B>) -> [[[u8; 16]; 2]; 8] {
        s.0.map(|lane| {
            lane.halves().map(|half| {
                let a: Array<u8, U16> = half.into();
                a.0
            })
        })
    }

    fn lane<B: IAesBlock2>(bytes: [u8; 16]) -> B {
        B::from(B::Half::from_block(&Array(bytes)))
    }

    /// <https://www.ietf.org/archive/id/draft-irtf-cfrg-aegis-aead-16.html#appendix-A.2.1>
    ///
    /// The AEGIS-128L vector, loaded into both instances.
    #[rustfmt::skip]
    fn check_update<B: IAesBlock2>() {
        let mut s: State128X2<B> = State128X2([
            lane(hex!("9b7e60b24cc873ea894ecc07911049a3")),
            lane(hex!("330be08f35300faa2ebf9a7b0d274658")),
            lane(hex!("7bbd5bd2b049f7b9b515cf26fbe7756c")),
            lane(hex!("c35a00f55ea86c3886ec5e928f87db18")),
            lane(hex!("9ebccafce87cab446396c4334592c91f")),
            lane(hex!("58d83e31f256371e60fc6bb257114601")),
            lane(hex!("1639b56ea322c88568a176585bc915de")),
            lane(hex!("640818ffb57dc0fbc2e72ae93457e39a")),
        ]);

        let m0 = lane(hex!("033e6975b94816879e42917650955aa0"));
        let m1 = lane(hex!("fcc1968a46b7e97861bd6e89af6aa55f"));

        s.update(m0, m1);

        let expected = [
            hex!("596ab773e4433ca0127c73f60536769d"),
            hex!("790394041a3d26ab697bde865014652d"),
            hex!("38cf49e4b65248acd533041b64dd0611"),
            hex!("16d8e58748f437bfff1797f780337cee"),
            hex!("9689ecdf08228c74d7e3360cca53d0a5"),
            hex!("a21746bb193a569e331e1aa985d0d729"),
            hex!("09d714e6fcf9177a8ed1cde7e3d259a6"),
            hex!("61279ba73167f0ab76f0a11bf203bdff"),
        ];

        for (got, want) in lanes(&s).iter().zip(expected) {
            assert_eq!(got[0], want);
            assert_eq!(got[1], want);
        }
    }

    /// <https://www.ietf.org/archive/id/draft-irtf-cfrg-aegis-aead-16.html#appendix-A.4.1>
    #[rustfmt::skip]
    fn check_init<B: IAesBlock2>() {
        let key = Array(hex!("000102030405060708090a0b0c0d0e0f"));
        let nonce = Array(hex!("101112131415161718191a1b1c1d1e1f"));

        let v = lanes(&State128X2::<B>::new(&key, &nonce));

        assert_eq!(v[0][0], hex!("a4fc1ad9a72942fb88bd2cabbba6509a"));
        assert_eq!(v[0][1], hex!("80a40e392fc71084209b6c3319bdc6cc"));

        assert_eq!(v[1][0], hex!("380f435cf801763b1f0c2a2f7212052d"));
        assert_eq!(v[1][1], hex!("73796607b59b1b650ee91c152af1f18a"));

        assert_eq!(v[2][0], hex!("6ee1de433ea877fa33bc0782abff2dcb"));
        assert_eq!(v[2][1], hex!("b9fab2ab496e16d1facaffd5453cbf14"));

        assert_eq!(v[3][0], hex!("85f94b0d4263bfa86fdf45a603d8b6ac"));
        assert_eq!(v[3][1], hex!("90356c8cadbaa2c969001da02e3feca0"));

        assert_eq!(v[4][0], hex!("09bd69ad3730174bcd2ce9a27cd1357e"));
        assert_eq!(v[4][1], hex!("e610b45125796a4fcf1708cef5c4f718"));

        assert_eq!(v[5][0], hex!("fcdeb0cf0a87bf442fc82383ddb0f6d6"));
        assert_eq!(v[5][1], hex!("61ad32a4694d6f3cca313a2d3f4687aa"));

        assert_eq!(v[6][0], hex!("571c207988659e2cdfbdaae77f4f37e3"));
        assert_eq!(v[6][1], hex!("32e6094e217573bf91fb28c145a3efa8"));

        assert_eq!(v[7][0], hex!("ca549badf8faa58222412478598651cf"));
        assert_eq!(v[7][1], hex!("3407279a54ce76d2e2e8a90ec5d108eb"));
    }

    #[test]
    fn update() {
        check_update::<AesBlock2>();
    }

    #[test]
    fn update_soft() {
        check_update::<soft::AesBlock2>();
    }

    #[test]
    fn init_aegis128x2() {
        check_init::<AesBlock2>();
    }

    #[test]
    fn init_aegis128x2_soft() {
        check_init::<soft::AesBlock2>();
    }

    #[test]
    fn instances_diverge_only_through_context() {
        let key = Array([0x42; 16]);
        let nonce = Array([0x24; 16]);

        let v = lanes(&State128X2::<AesBlock2>::new(&key, &nonce));
        for lane in v {
            assert_ne!(lane[0], lane[1]);
        }
    }

    #[test]
    fn partial_block_zeroes_tail() {
        let key = Array([1; 16]);
        let nonce = Array([2; 16]);
        let mut state = State128X2::<AesBlock2>::new(&key, &nonce);

        let mut block = Array([0xff; 64]);
        state.decrypt_partial_block(&mut block, 5);
        assert!(block[5..].iter().all(|&b| b == 0));
    }

    #[test]
    #[should_panic = "cn out of range"]
    fn partial_block_rejects_full_length() {
        let mut state = State128X2::<AesBlock2>::new(&Array([1; 16]), &Array([2; 16]));
        state.decrypt_partial_block(&mut Array([0; 64]), 64);
    }
}
