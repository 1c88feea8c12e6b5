//! Hard-coded placeholder content.
//!
//! Available at both design time and run time, so views always have
//! something to render.

/// Seed record for one item.
pub(crate) struct ItemSeed {
    pub unique_id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image_path: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

/// Seed record for one group and its items.
pub(crate) struct GroupSeed {
    pub unique_id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image_path: &'static str,
    pub description: &'static str,
    pub items: &'static [ItemSeed],
}

pub(crate) const SEED_GROUPS: &[GroupSeed] = &[
    GroupSeed {
        unique_id: "Group-1",
        title: "Introduction",
        subtitle: "",
        image_path: "Assets/10.png",
        description: "",
        items: &[
            ItemSeed {
                unique_id: "Group-1-Item-1",
                title: "Love",
                subtitle: "",
                image_path: "Assets/11.png",
                description: "The English word love can refer to a variety of different feelings, states, and attitudes, ranging from pleasure (I loved that meal) to interpersonal attraction (I love my partner). It can refer to an emotion of a strong affection and personal attachment.",
                content: "The English word love can refer to a variety of different feelings, states, and attitudes, ranging from pleasure (I loved that meal) to interpersonal attraction (I love my partner). It can refer to an emotion of a strong affection and personal attachment.It can also be a virtue representing human kindness, compassion, and affection—the unselfish loyal and benevolent concern for the good of another.\n\n And it may describe compassionate and affectionate actions towards other humans, one's self or animals.\n\nIn terms of interpersonal attraction, four forms of love have traditionally been distinguished, based on ancient Greek precedent: the love of kinship or familiarity (in Greek, storge), the love of friendship (philia), the love of sexual and/or romantic desire (eros), and self-emptying or divine love (agape).Modern authors have distinguished further varieties of romantic love.[6] Non-Western traditions have also distinguished variants or symbioses of these states. This diversity of uses and meanings, combined with the complexity of the feelings involved, makes love unusually difficult to consistently define, compared to other emotional states.",
            },
            ItemSeed {
                unique_id: "Group-1-Item-2",
                title: "Interpersonal relationship",
                subtitle: "",
                image_path: "Assets/12.png",
                description: "An interpersonal relationship is an association between two or more people that may range in duration from brief to enduring.",
                content: "An interpersonal relationship is an association between two or more people that may range in duration from brief to enduring. This association may be based on inference, love, solidarity, regular business interactions, or some other type of social commitment. Interpersonal relationships are formed in the context of social, cultural and other influences. The context can vary from family or kinship relations, friendship, marriage, relations with associates, work, clubs, neighborhoods, and places of worship. They may be regulated by law, custom, or mutual agreement, and are the basis of social groups and society as a whole.",
            },
            ItemSeed {
                unique_id: "Group-1-Item-3",
                title: "Biological basis of love",
                subtitle: "",
                image_path: "Assets/13.png",
                description: "The theory of a biological basis of love has been explored by such biological sciences as evolutionary psychology, evolutionary biology, anthropology and neuroscience.",
                content: "Evolutionary psychology has proposed several explanations for love. Human infants and children are for a very long time dependent on parental help. Love has therefore been seen as a mechanism to promote mutual parental support of children for an extended time period. Another is that sexually transmitted diseases may cause, among other effects, permanently reduced fertility, injury to the fetus, and increase risks during childbirth. This would favor exclusive long-term relationships reducing the risk of contracting a STD.",
            },
            ItemSeed {
                unique_id: "Group-1-Item-4",
                title: "Human bonding",
                subtitle: "",
                image_path: "Assets/14.png",
                description: "Human bonding is the process of development of a close, interpersonal relationship.",
                content: "Human bonding is the process of development of a close, interpersonal relationship. It most commonly takes place between family members or friends,[1] but can also develop among groups such as sporting teams and whenever people spend time together. Bonding is a mutual, interactive process, and is different from simple liking.\n\nBonding typically refers to the process of attachment that develops between romantic partners, close friends, or parents and children. This bond is characterized by emotions such as affection and trust. Any two people who spend time together may form a bond. Male bonding refers to the establishment of relationships between men through shared activities that often exclude females. The term female bonding is less frequently used, but refers to the formation of close personal relationships between women.",
            },
            ItemSeed {
                unique_id: "Group-1-Item-5",
                title: "The Art of Loving",
                subtitle: "",
                image_path: "Assets/15.png",
                description: "The Art of Loving is a 1956 book by psychologist and social philosopher Erich Fromm, which was published as part of the World Perspectives Series edited by Ruth Nanda Anshen.",
                content: "Fromm presents love as a skill that can be taught and developed. He rejects the idea of loving as something magical and mysterious that cannot be analyzed and explained, and is therefore skeptical about popular ideas such as falling in love or being helpless in the face of love. Because modern humans are alienated from each other and from nature, we seek refuge from our aloneness in romantic love and marriage. However, Fromm observes that real love is not a sentiment which can be easily indulged in by anyone. It is only through developing one's total personality to the capacity of loving one's neighbor with true humility, courage, faith and discipline that one attains the capacity to experience real love. This should be considered a rare achievement. Fromm defended these opinions also in interview with Mike Wallace when he states: love today is a relatively rare phenomenon, that we have a great deal of sentimentality; we have a great deal of illusion about love, namely as a...as something one falls in. But the question is that one cannot fall in love, really; one has to be in love. And that means that loving becomes, and the ability to love, becomes one of the most important things in life",
            },
        ],
    },
    GroupSeed {
        unique_id: "Group-2",
        title: "Impact",
        subtitle: "",
        image_path: "Assets/20.png",
        description: "",
        items: &[
            ItemSeed {
                unique_id: "Group-2-Item-1",
                title: "Emotion",
                subtitle: "",
                image_path: "Assets/21.png",
                description: "In psychology, philosophy, and their many subsets, emotion is the generic term for subjective, conscious experience.",
                content: "In psychology, philosophy, and their many subsets, emotion is the generic term for subjective, conscious experience that is characterized primarily by psychophysiological expressions, biological reactions, and mental states. Emotion is often associated and considered reciprocally influential with mood, temperament, personality, disposition, and motivation,[citation needed] as well as influenced by hormones and neurotransmitters such as dopamine, noradrenaline, serotonin, oxytocin, cortisol and GABA. Emotion is often the driving force behind motivation, positive or negative.An alternative definition of emotion is a positive or negative experience that is associated with a particular pattern of physiological activity.",
            },
            ItemSeed {
                unique_id: "Group-2-Item-2",
                title: "Affection",
                subtitle: "",
                image_path: "Assets/22.png",
                description: "Affection or fondness is a disposition or rare state of mind or body that is often associated with a feeling or type of love. It has given rise to a number of branches of philosophy and psychology concerning emotion, disease, influence, state of being,",
                content: "Affection or fondness is a disposition or rare state of mind or body that is often associated with a feeling or type of love. It has given rise to a number of branches of philosophy and psychology concerning emotion, disease, influence, state of being,Affection is popularly used to denote a feeling or type of love, amounting to more than goodwill or friendship. Writers on ethics generally use the word to refer to distinct states of feeling, both lasting and spasmodic. Some contrast it with passion as being free from the distinctively sensual element.",
            },
            ItemSeed {
                unique_id: "Group-2-Item-3",
                title: "Attachment",
                subtitle: "",
                image_path: "Assets/23.png",
                description: "Attachment theory describes the dynamics of long-term relationships between humans. Its most important tenet is that an infant needs to develop a relationship with at least one primary caregiver for social and emotional development to occur normally.",
                content: "Attachment theory describes the dynamics of long-term relationships between humans. Its most important tenet is that an infant needs to develop a relationship with at least one primary caregiver for social and emotional development to occur normally. Attachment theory explains how much the parents' relationship with the child influences development. Attachment theory is an interdisciplinary study encompassing the fields of psychological, evolutionary, and ethological theory. Immediately after World War II, homeless and orphaned children presented many difficulties, and psychiatrist and psychoanalyst John Bowlby was asked by the UN to write a pamphlet on the issue which he entitled maternal deprivation. Attachment theory grew out of his subsequent work on the issues raised.s",
            },
        ],
    },
    GroupSeed {
        unique_id: "Group-3",
        title: "Directions",
        subtitle: "",
        image_path: "Assets/30.png",
        description: "",
        items: &[
            ItemSeed {
                unique_id: "Group-3-Item-1",
                title: "Cultural identity",
                subtitle: "",
                image_path: "Assets/31.png",
                description: "Cultural identity is the identity of a group or culture, or of an individual as far as one is influenced by one's belonging to a group or culture. Cultural identity is similar to and overlaps with, identity politics.",
                content: "Various modern cultural studies and social theories have investigated cultural identity. In recent decades, a new form of identification has emerged which breaks down the understanding of the individual as a coherent whole subject into a collection of various cultural identifiers. These cultural identifiers may be the result of various conditions including: location, gender, race, history, nationality, language, sexuality, religious beliefs, ethnicity, aesthetics, and even food. The divisions between cultures can be very fine in some parts of the world, especially places such as Canada or the United States, where the population is ethnically diverse and social unity is based primarily on common social values and beliefs.",
            },
            ItemSeed {
                unique_id: "Group-3-Item-2",
                title: "Apathy",
                subtitle: "",
                image_path: "Assets/32.png",
                description: "Apathy (also called impassivity or perfunctoriness) is a state of indifference, or the suppression of emotions such as concern, excitement, motivation and passion.",
                content: "Apathy (also called impassivity or perfunctoriness) is a state of indifference, or the suppression of emotions such as concern, excitement, motivation and passion. An apathetic individual has an absence of interest in or concern about emotional, social, spiritual, philosophical and/or physical life.",
            },
            ItemSeed {
                unique_id: "Group-3-Item-3",
                title: "Friendship",
                subtitle: "",
                image_path: "Assets/33.png",
                description: "Friendship is a relationship of mutual affection between two or more people. Friendship is a stronger form of interpersonal bond than an acquaintanceship. Friendship has been studied in academic fields such as sociology, social psychology, anthropology, and philosophy.",
                content: "Friendship is a relationship of mutual affection between two or more people. Friendship is a stronger form of interpersonal bond than an acquaintanceship. Friendship has been studied in academic fields such as sociology, social psychology, anthropology, and philosophy. Various academic theories of friendship have been proposed, including social exchange theory, equity theory, relational dialectics, and attachment styles.\n\nAlthough there are many forms of friendship, some of which may vary from place to place, certain characteristics are present in many types of friendship. Such characteristics include affection, sympathy, empathy, honesty, altruism, mutual understanding and compassion, enjoyment of each other's company, trust, and the ability to be oneself, express one's feelings, and make mistakes without fear of judgment from the friend. While there is no practical limit on what types of people can form a friendship, friends tend to share common backgrounds, occupations, or interests, and have similar demographics.",
            },
            ItemSeed {
                unique_id: "Group-3-Item-4",
                title: "Essence",
                subtitle: "",
                image_path: "Assets/34.png",
                description: "In philosophy, essence is the attribute or set of attributes that make an entity or substance what it fundamentally is, and which it has by necessity, and without which it loses its identity.",
                content: "In philosophy, essence is the attribute or set of attributes that make an entity or substance what it fundamentally is, and which it has by necessity, and without which it loses its identity. Essence is contrasted with accident: a property that the entity or substance has contingently, without which the substance can still retain its identity. The concept originates with Aristotle, who used the Greek expression to ti ên einai, literally 'the what it was to be', or sometimes the shorter phrase to ti esti, literally 'the what it is,' for the same idea. This phrase presented such difficulties for his Latin translators that they coined the word essentia (English essence) to represent the whole expression. For Aristotle and his scholastic followers the notion of essence is closely linked to that of definition (horismos).",
            },
            ItemSeed {
                unique_id: "Group-3-Item-5",
                title: "Altruism",
                subtitle: "",
                image_path: "Assets/35.png",
                description: "Altruism or selflessness is the principle or practice of concern for the welfare of others. It is a traditional virtue in many cultures and a core aspect of various religious traditions, though the concept of others toward whom concern should be directed can vary among cultures and religions.",
                content: "Altruism or selflessness is the principle or practice of concern for the welfare of others. It is a traditional virtue in many cultures and a core aspect of various religious traditions, though the concept of others toward whom concern should be directed can vary among cultures and religions. Altruism or selflessness is the opposite of selfishness.\n\nAltruism can be distinguished from feelings of duty and loyalty. Altruism is a motivation to provide something of value to a party who must be anyone but one's self, while duty focuses on a moral obligation towards a specific individual (e.g., a god, a king), or collective (e.g., a government). Pure altruism consists of sacrificing something for someone other than the self (e.g. sacrificing time, energy or possessions) with no expectation of any compensation or benefits, either direct, or indirect (e.g., receiving recognition for the act of giving).",
            },
            ItemSeed {
                unique_id: "Group-3-Item-6",
                title: "Erotomania",
                subtitle: "",
                image_path: "Assets/36.png",
                description: "Erotomania is a type of delusion in which the affected person believes that another person, usually a stranger, high-status or famous person, is in love with him or her. The illness often occurs during psychosis, especially in patients with schizophrenia, delusional disorder or bipolar mania.",
                content: "Erotomania is a type of delusion in which the affected person believes that another person, usually a stranger, high-status or famous person, is in love with him or her. The illness often occurs during psychosis, especially in patients with schizophrenia, delusional disorder or bipolar mania.[1] During an erotomanic episode, the patient believes that a secret admirer is declaring his or her affection to the patient, often by special glances, signals, telepathy, or messages through the media. Usually the patient then returns the perceived affection by means of letters, phone calls, gifts, and visits to the unwitting recipient. Even though these advances are unexpected and often unwanted, any denial of affection by the object of this delusional love is dismissed by the patient as a ploy to conceal the forbidden love from the rest of the world.",
            },
            ItemSeed {
                unique_id: "Group-3-Item-7",
                title: "Mania",
                subtitle: "",
                image_path: "Assets/37.png",
                description: "Mania is a state of abnormally elevated or irritable mood, arousal, and/or energy levels.[1] In a sense, it is the opposite of depression. Mania is a criterion for certain psychiatric diagnoses.",
                content: "In addition to mood disorders, persons may exhibit manic behaviour because of drug intoxication (notably stimulants, such as cocaine and methamphetamine), medication side effects (notably steroids and SSRIs), and malignancy. But mania is most often associated with bipolar disorder, where episodes of mania may alternate with episodes of major depression. Gelder, Mayou, and Geddes (2005) suggest that it is vital that mania be predicted in the early stages because otherwise the patient becomes reluctant to comply to the treatment. The criteria for bipolar disorder do not include depressive episodes, and the presence of mania in the absence of depressive episodes is sufficient for a diagnosis. Regardless, those who never experience depression also experience cyclical changes in mood. These cycles are often affected by changes in sleep cycle (too much or too little), diurnal rhythms, and environmental stressors.",
            },
        ],
    },
];
