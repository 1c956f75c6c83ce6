/// Fixed-width encoding into a caller-owned slot.
pub trait Encoder {
    type Item;
    type Error: std::error::Error + 'static;

    /// Bytes every encoded item occupies.
    fn encoded_size(&self) -> usize;

    /// Writes `item` at the front of `dst` and returns the number of bytes written.
    /// Fails when `dst` is shorter than `encoded_size()`.
    fn encode_into(&self, item: &Self::Item, dst: &mut [u8]) -> Result<usize, Self::Error>;

    fn encode(&self, item: &Self::Item) -> Result<Vec<u8>, Self::Error> {
        let mut bytes = vec![0u8; self.encoded_size()];
        let written = self.encode_into(item, &mut bytes)?;
        bytes.truncate(written);

        Ok(bytes)
    }
}

pub trait Decoder {
    type Item;
    type Error: std::error::Error + 'static;

    /// Decodes one item from the front of `src`, returning it with the number of bytes consumed.
    fn decode(&self, src: &[u8]) -> Result<(Self::Item, usize), Self::Error>;
}
